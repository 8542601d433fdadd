// SPDX-License-Identifier: Apache-2.0

use std::{error, ffi::CStr, ffi::NulError, fmt};
use uvcstream_sys as ffi;

/// A native libuvc status code together with its human-readable message and
/// the closest portable errno value.
///
/// Every status-returning native call is routed through [`Status::check`];
/// any non-success code surfaces as [`Error::Driver`] (or a more specific
/// variant chosen at the call boundary).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    code: ffi::uvc_error_t,
}

/// (status code, message, portable errno) rows for every code libuvc defines.
/// The message is the fallback used when `uvc_strerror` is unavailable.
const STATUS_TABLE: &[(ffi::uvc_error_t, &str, Option<i32>)] = &[
    (ffi::uvc_error_UVC_SUCCESS, "Success (no error)", None),
    (ffi::uvc_error_UVC_ERROR_IO, "Input/output error", Some(5)),
    (
        ffi::uvc_error_UVC_ERROR_INVALID_PARAM,
        "Invalid parameter",
        Some(22),
    ),
    (ffi::uvc_error_UVC_ERROR_ACCESS, "Access denied", Some(13)),
    (ffi::uvc_error_UVC_ERROR_NO_DEVICE, "No such device", Some(19)),
    (ffi::uvc_error_UVC_ERROR_NOT_FOUND, "Not found", Some(2)),
    (ffi::uvc_error_UVC_ERROR_BUSY, "Resource busy", Some(16)),
    (
        ffi::uvc_error_UVC_ERROR_TIMEOUT,
        "Operation timed out",
        Some(110),
    ),
    (ffi::uvc_error_UVC_ERROR_OVERFLOW, "Overflow", Some(75)),
    (ffi::uvc_error_UVC_ERROR_PIPE, "Pipe error", Some(32)),
    (
        ffi::uvc_error_UVC_ERROR_INTERRUPTED,
        "System call interrupted (perhaps due to signal)",
        Some(4),
    ),
    (
        ffi::uvc_error_UVC_ERROR_NO_MEM,
        "Insufficient memory",
        Some(12),
    ),
    (
        ffi::uvc_error_UVC_ERROR_NOT_SUPPORTED,
        "Operation not supported",
        Some(95),
    ),
    (
        ffi::uvc_error_UVC_ERROR_INVALID_DEVICE,
        "Invalid device",
        Some(57),
    ),
    (
        ffi::uvc_error_UVC_ERROR_INVALID_MODE,
        "Invalid mode",
        Some(53),
    ),
    (
        ffi::uvc_error_UVC_ERROR_CALLBACK_EXISTS,
        "Callback exists, cannot poll",
        Some(52),
    ),
    (ffi::uvc_error_UVC_ERROR_OTHER, "Unknown error", None),
];

impl Status {
    pub fn from_raw(code: ffi::uvc_error_t) -> Self {
        Status { code }
    }

    /// Raw `uvc_error_t` value.
    pub fn code(&self) -> i32 {
        self.code
    }

    /// Closest portable errno value, if one exists for this code.
    pub fn errno(&self) -> Option<i32> {
        STATUS_TABLE
            .iter()
            .find(|(code, _, _)| *code == self.code)
            .and_then(|(_, _, errno)| *errno)
    }

    /// Human-readable message for this status.
    ///
    /// Asks the loaded library via `uvc_strerror` first, falling back to the
    /// static table when the library is not loaded or returns nothing.
    pub fn message(&self) -> String {
        if let Some(lib) = ffi::try_library() {
            let ptr = unsafe { lib.uvc_strerror(self.code) };
            if !ptr.is_null() {
                if let Ok(msg) = unsafe { CStr::from_ptr(ptr) }.to_str() {
                    return msg.to_string();
                }
            }
        }
        STATUS_TABLE
            .iter()
            .find(|(code, _, _)| *code == self.code)
            .map(|(_, msg, _)| msg.to_string())
            .unwrap_or_else(|| format!("Unrecognized status code {}", self.code))
    }

    /// Turn a native status code into a `Result`, mapping any non-success
    /// code to [`Error::Driver`].
    pub fn check(code: ffi::uvc_error_t) -> Result<(), Error> {
        if code == ffi::uvc_error_UVC_SUCCESS {
            Ok(())
        } else {
            Err(Error::Driver(Status::from_raw(code)))
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.errno() {
            Some(errno) => write!(f, "{} (code {}, errno {})", self.message(), self.code, errno),
            None => write!(f, "{} (code {})", self.message(), self.code),
        }
    }
}

/// Error type for UVC binding operations
#[derive(Debug)]
pub enum Error {
    /// The UVC driver library (libuvc.so) could not be loaded at runtime
    LibraryNotLoaded(ffi::libloading::Error),

    /// The native library context failed to initialize; fatal to the session
    Init(Status),

    /// Device enumeration failed; the caller may retry
    Enumeration(Status),

    /// No device matched the given filters
    NotFound(Status),

    /// Any other native status-code failure, with the mapped message and code
    Driver(Status),

    /// The requested stream format/resolution/rate was rejected by the device
    UnsupportedFormat(Status),

    /// A polling call exceeded its timeout; retryable
    Timeout,

    /// The native call succeeded but produced no frame; retryable
    NullFrame,

    /// The operation is not permitted while the device is streaming
    Busy,

    /// Unknown control name requested
    UnknownControl(String),

    /// Device list index outside `[0, len)`
    IndexOutOfBounds { index: usize, len: usize },

    /// The operation requires an open device handle
    NotOpen,

    /// The operation requires an active stream
    NotStreaming,

    /// The device has been closed; only repeated `close()` is valid
    Closed,

    /// CString creation error (null byte found in string)
    CString(NulError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::LibraryNotLoaded(err) => {
                write!(f, "UVC driver library could not be loaded: {}", err)
            }
            Error::Init(status) => write!(f, "Context initialization failed: {}", status),
            Error::Enumeration(status) => write!(f, "Device enumeration failed: {}", status),
            Error::NotFound(status) => write!(f, "No matching device: {}", status),
            Error::Driver(status) => write!(f, "Driver error: {}", status),
            Error::UnsupportedFormat(status) => {
                write!(f, "Unsupported stream format: {}", status)
            }
            Error::Timeout => write!(f, "Frame poll timed out"),
            Error::NullFrame => write!(f, "Driver produced no frame"),
            Error::Busy => write!(f, "Operation not permitted while streaming"),
            Error::UnknownControl(name) => write!(f, "Unknown control: {}", name),
            Error::IndexOutOfBounds { index, len } => {
                write!(f, "Device index {} out of range (length {})", index, len)
            }
            Error::NotOpen => write!(f, "Device is not open"),
            Error::NotStreaming => write!(f, "Device is not streaming"),
            Error::Closed => write!(f, "Device has been closed"),
            Error::CString(err) => write!(f, "CString creation error: {}", err),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::LibraryNotLoaded(err) => Some(err),
            Error::CString(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ffi::libloading::Error> for Error {
    fn from(err: ffi::libloading::Error) -> Self {
        Error::LibraryNotLoaded(err)
    }
}

impl From<NulError> for Error {
    fn from(err: NulError) -> Self {
        Error::CString(err)
    }
}

impl Error {
    /// True for the two retryable pseudo-conditions a polling loop is
    /// expected to ignore: timeouts and success-without-a-frame.
    pub fn is_transient(&self) -> bool {
        matches!(self, Error::Timeout | Error::NullFrame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_errno_mapping() {
        assert_eq!(
            Status::from_raw(ffi::uvc_error_UVC_ERROR_TIMEOUT).errno(),
            Some(110)
        );
        assert_eq!(
            Status::from_raw(ffi::uvc_error_UVC_ERROR_PIPE).errno(),
            Some(32)
        );
        assert_eq!(Status::from_raw(ffi::uvc_error_UVC_ERROR_OTHER).errno(), None);
    }

    #[test]
    fn status_fallback_message() {
        // The library is not loaded in unit tests, so the static table is used.
        let status = Status::from_raw(ffi::uvc_error_UVC_ERROR_BUSY);
        assert_eq!(status.message(), "Resource busy");
    }

    #[test]
    fn check_success_and_failure() {
        assert!(Status::check(ffi::uvc_error_UVC_SUCCESS).is_ok());
        match Status::check(ffi::uvc_error_UVC_ERROR_IO) {
            Err(Error::Driver(status)) => assert_eq!(status.code(), -1),
            other => panic!("expected Driver error, got {:?}", other),
        }
    }

    #[test]
    fn transient_errors() {
        assert!(Error::Timeout.is_transient());
        assert!(Error::NullFrame.is_transient());
        assert!(!Error::Busy.is_transient());
        assert!(!Error::Driver(Status::from_raw(ffi::uvc_error_UVC_ERROR_IO)).is_transient());
    }

    #[test]
    fn unknown_status_code() {
        let status = Status::from_raw(-123);
        assert_eq!(status.errno(), None);
        assert!(status.message().contains("-123"));
    }
}
