// SPDX-License-Identifier: Apache-2.0

//! Frame capture with throughput statistics.

use crate::{
    error::CliError,
    utils::{find_target, Target},
};
use clap::Args as ClapArgs;
use serde::Serialize;
use std::{
    fs,
    path::PathBuf,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Instant,
};
use uvcstream::{context::Context, format::StreamFormat};

#[derive(ClapArgs, Debug)]
pub struct Args {
    #[command(flatten)]
    target: Target,

    /// Number of frames to capture
    #[arg(short = 'n', long, default_value_t = 30)]
    count: u32,

    /// Stream pixel format (mjpeg, yuyv, uyvy, rgb, bgr, gray8, ...)
    #[arg(short, long, value_parser = parse_format, default_value = "mjpeg")]
    format: StreamFormat,

    /// Frame width in pixels
    #[arg(long, default_value_t = 640)]
    width: i32,

    /// Frame height in pixels
    #[arg(long, default_value_t = 480)]
    height: i32,

    /// Requested frame rate
    #[arg(long, default_value_t = 30)]
    fps: i32,

    /// Poll timeout per frame in microseconds
    #[arg(long, default_value_t = 1_000_000)]
    timeout_us: i32,

    /// Directory to write captured frames into (frame_NNNN.jpg or .raw)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn parse_format(s: &str) -> Result<StreamFormat, String> {
    s.parse()
}

#[derive(Debug, Serialize)]
struct CaptureStats {
    frames: u32,
    bytes: usize,
    elapsed_ms: u128,
    fps: f64,
    transient_polls: u32,
    stopped_early: bool,
}

pub fn execute(args: Args, json: bool) -> Result<(), CliError> {
    log::debug!("Executing capture command: {:?}", args);

    let stop = Arc::new(AtomicBool::new(false));
    signal_hook::flag::register(signal_hook::consts::SIGINT, Arc::clone(&stop))
        .map_err(|e| CliError::General(format!("could not install SIGINT handler: {}", e)))?;

    if let Some(dir) = &args.output {
        fs::create_dir_all(dir)
            .map_err(|e| CliError::General(format!("could not create {}: {}", dir.display(), e)))?;
    }
    let extension = match args.format {
        StreamFormat::Mjpeg => "jpg",
        _ => "raw",
    };

    let context = Context::new()?;
    let mut device = find_target(&context, &args.target)?;
    device.open()?;
    device.set_stream_format(args.format, args.width, args.height, args.fps)?;
    device.start_streaming()?;
    log::info!(
        "capturing {} frames of {} {}x{} @ {} fps",
        args.count,
        args.format,
        args.width,
        args.height,
        args.fps
    );

    let started = Instant::now();
    let mut frames = 0u32;
    let mut bytes = 0usize;
    let mut transient_polls = 0u32;

    while frames < args.count && !stop.load(Ordering::Relaxed) {
        match device.get_frame(args.timeout_us) {
            Ok(frame) => {
                bytes += frame.len();
                if let Some(dir) = &args.output {
                    let path = dir.join(format!("frame_{:04}.{}", frames, extension));
                    if let Err(err) = fs::write(&path, frame.data()) {
                        log::warn!("could not write {}: {}", path.display(), err);
                    }
                }
                frames += 1;
            }
            Err(err) if err.is_transient() => {
                transient_polls += 1;
            }
            Err(err) => {
                device.close();
                return Err(err.into());
            }
        }
    }

    let elapsed = started.elapsed();
    device.stop_streaming().map_err(CliError::from)?;
    device.close();

    let stats = CaptureStats {
        frames,
        bytes,
        elapsed_ms: elapsed.as_millis(),
        fps: if elapsed.as_secs_f64() > 0.0 {
            frames as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        },
        transient_polls,
        stopped_early: stop.load(Ordering::Relaxed),
    };

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&stats).map_err(|e| CliError::General(e.to_string()))?
        );
    } else {
        println!(
            "captured {} frames ({} bytes) in {} ms ({:.1} fps, {} empty polls)",
            stats.frames, stats.bytes, stats.elapsed_ms, stats.fps, stats.transient_polls
        );
        if stats.stopped_early {
            println!("stopped early by SIGINT");
        }
    }

    Ok(())
}
