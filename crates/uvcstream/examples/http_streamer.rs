// SPDX-License-Identifier: Apache-2.0

//! MJPEG-over-HTTP streamer using polling frame delivery.
//!
//! Opens the first UVC camera on the system, polls frames on a dedicated
//! capture thread and serves them to any number of browsers as a
//! `multipart/x-mixed-replace` stream, one JPEG per part.
//!
//! Run with:
//!
//! ```sh
//! cargo run --example http_streamer
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
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    thread,
};
use tokio::sync::broadcast;
use tokio_stream::wrappers::BroadcastStream;
use uvcstream::{context::Context, device::DEFAULT_FRAME_TIMEOUT_US};

#[derive(Clone)]
struct AppState {
    tx: broadcast::Sender<Bytes>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut context = Context::new()?;
    let mut device = context.find_device(0, 0, None)?;
    device.open()?;
    device.start_streaming()?;
    log::info!("camera streaming, MJPEG 640x480 @ 30 fps by default");

    // Frames fan out to every connected browser; lagging receivers drop
    // frames rather than stalling the capture loop.
    let (tx, _rx) = broadcast::channel::<Bytes>(16);
    let running = Arc::new(AtomicBool::new(true));

    let capture_tx = tx.clone();
    let capture_running = running.clone();
    let capture = thread::spawn(move || {
        while capture_running.load(Ordering::Relaxed) {
            match device.get_frame(DEFAULT_FRAME_TIMEOUT_US) {
                Ok(frame) => {
                    // send only fails when no browser is connected
                    let _ = capture_tx.send(Bytes::from(frame.to_vec()));
                }
                Err(err) if err.is_transient() => continue,
                Err(err) => {
                    log::error!("capture failed: {}", err);
                    break;
                }
            }
        }
        if let Err(err) = device.stop_streaming() {
            log::warn!("stop_streaming failed: {}", err);
        }
        device.close();
    });

    serve(AppState { tx })?;

    log::info!("shutting down");
    running.store(false, Ordering::Relaxed);
    let _ = capture.join();
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
<head><title>UVC Stream</title></head>
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
