// SPDX-License-Identifier: Apache-2.0
//
// Device Lifecycle Tests (hardware layer)
//
// Every test in this file needs libuvc.so on the library path and at least
// one connected UVC camera. They are ignored by default:
//
//   cargo test --test device_lifecycle -- --ignored --nocapture
//
// Tests are serialized because they share the one physical camera.

use serial_test::serial;
use std::sync::mpsc;
use std::time::Duration;
use uvcstream::{
    context::Context,
    device::DEFAULT_FRAME_TIMEOUT_US,
    format::StreamFormat,
    Error,
};

#[ignore = "requires libuvc.so and a UVC camera (run with --include-ignored)"]
#[test]
#[serial]
fn list_matches_find() -> Result<(), Error> {
    let mut context = Context::new()?;
    let device_count = {
        let list = context.list_devices()?;
        assert!(list.get(list.len()).is_err());
        assert_eq!(list.iter().count(), list.len());
        list.len()
        // The snapshot is released here; devices vended from it must not be
        // kept un-opened past this point.
    };
    if device_count == 0 {
        // With zero devices, find_device must report NotFound.
        match context.find_device(0, 0, None) {
            Err(Error::NotFound(_)) => {}
            other => panic!("expected NotFound with empty list, got {:?}", other),
        }
    } else {
        context.find_device(0, 0, None)?.close();
    }
    Ok(())
}

#[ignore = "requires libuvc.so and a UVC camera (run with --include-ignored)"]
#[test]
#[serial]
fn close_twice_is_safe() -> Result<(), Error> {
    let context = Context::new()?;
    let mut device = context.find_device(0, 0, None)?;
    device.open()?;
    device.close();
    device.close();
    assert!(device.is_closed());
    Ok(())
}

#[ignore = "requires libuvc.so and a UVC camera (run with --include-ignored)"]
#[test]
#[serial]
fn descriptor_is_cached_until_freed() -> Result<(), Error> {
    let context = Context::new()?;
    let mut device = context.find_device(0, 0, None)?;

    let first = device.descriptor()?.clone();
    // Second fetch returns the identical cached copy.
    let second = device.descriptor()?.clone();
    assert_eq!(first, second);

    device.free_descriptor();
    let third = device.descriptor()?.clone();
    assert_eq!(first, third);

    device.close();
    Ok(())
}

#[ignore = "requires libuvc.so and a UVC camera (run with --include-ignored)"]
#[test]
#[serial]
fn default_format_applies_when_negotiation_skipped() -> Result<(), Error> {
    let context = Context::new()?;
    let mut device = context.find_device(0, 0, None)?;
    device.open()?;

    // No set_stream_format: MJPEG 640x480 @ 30 fps defaults apply lazily.
    device.start_streaming()?;
    let frame = poll_one(&mut device)?;
    assert_eq!(frame, (640, 480));

    device.stop_streaming()?;
    device.close();
    Ok(())
}

#[ignore = "requires libuvc.so and a UVC camera (run with --include-ignored)"]
#[test]
#[serial]
fn rejected_negotiation_leaves_no_stream() -> Result<(), Error> {
    let context = Context::new()?;
    let mut device = context.find_device(0, 0, None)?;
    device.open()?;

    // No real camera does five-figure frame rates.
    match device.set_stream_format(StreamFormat::Mjpeg, 640, 480, 100_000) {
        Err(Error::UnsupportedFormat(_)) => {}
        other => panic!("expected UnsupportedFormat, got {:?}", other),
    }
    assert!(!device.is_streaming());

    device.close();
    Ok(())
}

#[ignore = "requires libuvc.so and a UVC camera (run with --include-ignored)"]
#[test]
#[serial]
fn successive_polls_are_ordered() -> Result<(), Error> {
    let context = Context::new()?;
    let mut device = context.find_device(0, 0, None)?;
    device.open()?;
    device.start_streaming()?;

    let mut last_sequence = None;
    let mut seen = 0;
    while seen < 10 {
        let frame = match device.get_frame(DEFAULT_FRAME_TIMEOUT_US) {
            Ok(frame) => frame,
            Err(err) if err.is_transient() => continue,
            Err(err) => return Err(err),
        };
        if let Some(last) = last_sequence {
            assert!(frame.sequence() > last, "frames must arrive in order");
        }
        last_sequence = Some(frame.sequence());
        seen += 1;
    }

    device.stop_streaming()?;
    device.close();
    Ok(())
}

#[ignore = "requires libuvc.so and a UVC camera (run with --include-ignored)"]
#[test]
#[serial]
fn callback_delivers_frames() -> Result<(), Error> {
    let context = Context::new()?;
    let mut device = context.find_device(0, 0, None)?;

    let (tx, rx) = mpsc::sync_channel::<(u64, usize)>(8);
    device.set_callback(
        Some(Box::new(move |frame, token| {
            let _ = tx.try_send((token, frame.len()));
        })),
        12345,
    )?;
    device.open()?;
    device.start_streaming()?;

    // Polling is not permitted while a callback is registered.
    match device.get_frame(DEFAULT_FRAME_TIMEOUT_US) {
        Err(Error::Driver(_)) => {}
        other => panic!("expected driver error in callback mode, got {:?}", other),
    }

    // Registration changes are rejected while streaming.
    match device.set_callback(None, 0) {
        Err(Error::Busy) => {}
        other => panic!("expected Busy while streaming, got {:?}", other),
    }

    let (token, len) = rx
        .recv_timeout(Duration::from_secs(5))
        .expect("a frame should arrive within five seconds");
    assert_eq!(token, 12345);
    assert!(len > 0);

    device.stop_streaming()?;
    device.set_callback(None, 0)?;
    device.close();
    Ok(())
}

#[ignore = "requires libuvc.so and a UVC camera (run with --include-ignored)"]
#[test]
#[serial]
fn controls_round_trip() -> Result<(), Error> {
    let context = Context::new()?;
    let mut device = context.find_device(0, 0, None)?;
    device.open()?;

    for control in device.controls() {
        println!("{}", control);
        assert!(control.min() <= control.max());
    }

    if device.control("Brightness").is_some() {
        let before = device.get_control("Brightness")?;
        assert!(device.set_control("Brightness", before));
    }
    device.set_control_defaults();

    device.close();
    Ok(())
}

fn poll_one(device: &mut uvcstream::device::Device) -> Result<(u32, u32), Error> {
    loop {
        match device.get_frame(DEFAULT_FRAME_TIMEOUT_US) {
            Ok(frame) => return Ok((frame.width(), frame.height())),
            Err(err) if err.is_transient() => continue,
            Err(err) => return Err(err),
        }
    }
}
