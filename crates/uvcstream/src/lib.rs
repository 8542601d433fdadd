// SPDX-License-Identifier: Apache-2.0

//! UVC Stream Library for Rust
//!
//! Safe Rust bindings for libuvc, the USB Video Class driver library,
//! providing lifecycle-managed access to UVC cameras: device discovery,
//! typed hardware controls (exposure, focus, white balance, ...) and video
//! frame delivery by polling or asynchronous callback.
//!
//! The native library is loaded at runtime (`libuvc.so`, overridable through
//! the `UVC_LIBRARY` environment variable); it owns USB transport,
//! isochronous transfer and format negotiation. This crate maps its handles
//! onto owned Rust types whose drops release resources in strict
//! reverse-acquisition order.
//!
//! # Quick Start
//!
//! ## Polling for frames
//!
//! ```no_run
//! use uvcstream::context::Context;
//! use uvcstream::device::DEFAULT_FRAME_TIMEOUT_US;
//!
//! let mut context = Context::new()?;
//! let mut device = context.find_device(0, 0, None)?;
//! device.open()?;
//! device.start_streaming()?;
//! for _ in 0..100 {
//!     let frame = match device.get_frame(DEFAULT_FRAME_TIMEOUT_US) {
//!         Ok(frame) => frame,
//!         Err(err) if err.is_transient() => continue,
//!         Err(err) => return Err(err),
//!     };
//!     println!("frame {}: {} bytes", frame.sequence(), frame.len());
//! }
//! device.close();
//! # Ok::<(), uvcstream::Error>(())
//! ```
//!
//! ## Receiving frames through a callback
//!
//! The callback runs on a thread owned by the capture library; it must not
//! block, and the frame it receives is only valid for the duration of the
//! call.
//!
//! ```no_run
//! use uvcstream::context::Context;
//!
//! let context = Context::new()?;
//! let mut device = context.find_device(0, 0, None)?;
//! device.set_callback(
//!     Some(Box::new(|frame, token| {
//!         let bytes = frame.to_vec();
//!         println!("token {}: {} bytes", token, bytes.len());
//!     })),
//!     12345,
//! )?;
//! device.open()?;
//! device.start_streaming()?;
//! # Ok::<(), uvcstream::Error>(())
//! ```
//!
//! ## Hardware controls
//!
//! ```no_run
//! use uvcstream::context::Context;
//!
//! let context = Context::new()?;
//! let mut device = context.find_device(0, 0, None)?;
//! device.open()?;
//! for control in device.controls() {
//!     println!("{}", control);
//! }
//! if device.set_control("Brightness", 128) {
//!     println!("brightness now {}", device.get_control("Brightness")?);
//! }
//! # Ok::<(), uvcstream::Error>(())
//! ```

/// Helper macro for modules to get library reference and call functions
/// All functions must return Result<T, Error> to use this macro
#[macro_export]
macro_rules! uvc {
    ($fn_name:ident($($args:expr),*)) => {
        {
            #[allow(clippy::macro_metavars_in_unsafe)]
            let result = {
                let lib = uvcstream_sys::init()?;
                unsafe { lib.$fn_name($($args),*) }
            };
            result
        }
    };
}

/// The error module maps native status codes onto the crate error type.
pub mod error;

/// The format module describes negotiable stream pixel formats.
pub mod format;

/// The frame module provides the borrowed view over captured video buffers.
pub mod frame;

/// The catalog module holds the static table of known hardware controls.
pub mod catalog;

/// The control module provides live, bound control accessors.
pub mod control;

/// The device module provides device lifecycle, streaming and enumeration.
pub mod device;

/// The context module provides the process-level library handle.
pub mod context;

pub use error::{Error, Status};
