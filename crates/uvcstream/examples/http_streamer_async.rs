// SPDX-License-Identifier: Apache-2.0

//! MJPEG-over-HTTP streamer using callback frame delivery.
//!
//! The capture library invokes the registered callback on a thread it owns;
//! the callback copies the JPEG bytes into a bounded queue and returns
//! immediately. When the queue is full the newest frame is dropped so the
//! capture thread is never blocked. A consumer thread drains the queue into
//! the broadcast channel the HTTP handlers subscribe to.
//!
//! Run with:
//!
//! ```sh
//! cargo run --example http_streamer_async
//! ```
//!
//! then open http://localhost:8000/ in a browser.

use axum::{
    body::Body,
    extract::State,
    http::header,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use bytes::Bytes;
use futures::StreamExt;
use std::{
    net::SocketAddr,
    sync::mpsc::{self, TrySendError},
    thread,
};
use tokio::sync::broadcast;
use tokio_stream::wrappers::BroadcastStream;
use uvcstream::context::Context;

/// Frames buffered between the capture callback and the consumer thread.
const QUEUE_DEPTH: usize = 5;

#[derive(Clone)]
struct AppState {
    tx: broadcast::Sender<Bytes>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut context = Context::new()?;
    let mut device = context.find_device(0, 0, None)?;

    let (frame_tx, frame_rx) = mpsc::sync_channel::<Bytes>(QUEUE_DEPTH);
    device.set_callback(
        Some(Box::new(move |frame, _token| {
            // Runs on the capture thread: copy and hand off, never block.
            match frame_tx.try_send(Bytes::from(frame.to_vec())) {
                Ok(()) => {}
                // Queue full: drop this frame rather than stall the driver.
                Err(TrySendError::Full(_)) => {}
                Err(TrySendError::Disconnected(_)) => {}
            }
        })),
        12345,
    )?;
    device.open()?;
    device.start_streaming()?;

    let (tx, _rx) = broadcast::channel::<Bytes>(16);
    let consumer_tx = tx.clone();
    let consumer = thread::spawn(move || {
        // The first-delivery diagnostic lives with this consumer, not in
        // process-wide state.
        let mut first_seen = false;
        while let Ok(jpeg) = frame_rx.recv() {
            if !first_seen {
                log::info!(
                    "first frame received from capture callback ({} bytes)",
                    jpeg.len()
                );
                first_seen = true;
            }
            let _ = consumer_tx.send(jpeg);
        }
    });

    serve(AppState { tx })?;

    log::info!("shutting down");
    device.stop_streaming()?;
    // Dropping the callback drops the queue sender, which ends the consumer.
    device.set_callback(None, 0)?;
    device.close();
    let _ = consumer.join();
    context.close();
    Ok(())
}

#[tokio::main]
async fn serve(state: AppState) -> Result<(), Box<dyn std::error::Error>> {
    let app = Router::new()
        .route("/", get(index))
        .route("/video_feed", get(video_feed))
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], 8000));
    log::info!("listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;
    Ok(())
}

async fn index() -> impl IntoResponse {
    Html(
        r#"<!DOCTYPE html>
<html>
<head><title>UVC Stream (async)</title></head>
<body style="background: #111; color: #eee; text-align: center;">
  <h1>UVC Camera Feed</h1>
  <img src="/video_feed" alt="live camera stream">
</body>
</html>"#,
    )
}

async fn video_feed(State(state): State<AppState>) -> impl IntoResponse {
    let parts = BroadcastStream::new(state.tx.subscribe())
        .filter_map(|result| async move { result.ok() })
        .map(|jpeg| Ok::<Bytes, std::convert::Infallible>(part(&jpeg)));

    Response::builder()
        .header(
            header::CONTENT_TYPE,
            "multipart/x-mixed-replace; boundary=frame",
        )
        .body(Body::from_stream(parts))
        .expect("static response headers")
}

/// One multipart part: boundary line, JPEG content type, then the raw frame.
fn part(jpeg: &Bytes) -> Bytes {
    let mut part = Vec::with_capacity(jpeg.len() + 64);
    part.extend_from_slice(b"--frame\r\nContent-Type: image/jpeg\r\n\r\n");
    part.extend_from_slice(jpeg);
    part.extend_from_slice(b"\r\n");
    Bytes::from(part)
}
