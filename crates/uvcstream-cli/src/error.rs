// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::process::ExitCode;

/// CLI-specific error type with exit code mapping
#[derive(Debug)]
pub enum CliError {
    /// Invalid command-line arguments
    InvalidArgs(String),
    /// Camera device not found or inaccessible
    CameraNotFound(String),
    /// UVC driver library not available
    DriverUnavailable(String),
    /// Operation timed out
    Timeout(String),
    /// General error from the UVC Stream library
    General(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::InvalidArgs(msg) => write!(f, "Invalid arguments: {}", msg),
            CliError::CameraNotFound(msg) => write!(f, "Camera not found: {}", msg),
            CliError::DriverUnavailable(msg) => write!(f, "Driver unavailable: {}", msg),
            CliError::Timeout(msg) => write!(f, "Timeout: {}", msg),
            CliError::General(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            CliError::InvalidArgs(_) => ExitCode::from(2),
            CliError::CameraNotFound(_) => ExitCode::from(3),
            CliError::DriverUnavailable(_) => ExitCode::from(4),
            CliError::Timeout(_) => ExitCode::from(6),
            CliError::General(_) => ExitCode::from(1),
        }
    }
}

/// Map uvcstream::Error to CliError with appropriate exit codes
impl From<uvcstream::Error> for CliError {
    fn from(err: uvcstream::Error) -> Self {
        use uvcstream::Error;

        match err {
            // Library loading and context bring-up failures
            Error::LibraryNotLoaded(lib_err) => {
                CliError::DriverUnavailable(format!("Failed to load libuvc: {}", lib_err))
            }
            Error::Init(status) => {
                CliError::DriverUnavailable(format!("Context initialization failed: {}", status))
            }

            // Device lookup failures
            Error::NotFound(status) => {
                CliError::CameraNotFound(format!("No matching device: {}", status))
            }
            Error::Enumeration(status) => {
                CliError::General(format!("Device enumeration failed: {}", status))
            }

            // Polling conditions
            Error::Timeout => CliError::Timeout("Frame poll timed out".to_string()),
            Error::NullFrame => CliError::Timeout("Driver produced no frame".to_string()),

            // Caller mistakes
            Error::UnsupportedFormat(status) => {
                CliError::InvalidArgs(format!("Unsupported stream format: {}", status))
            }
            Error::UnknownControl(name) => {
                CliError::InvalidArgs(format!("Unknown control: {}", name))
            }
            Error::IndexOutOfBounds { index, len } => {
                CliError::InvalidArgs(format!("Device index {} out of range ({})", index, len))
            }

            // Everything else is a general driver-side failure
            other => CliError::General(format!("{}", other)),
        }
    }
}

/// Helper function to convert result to exit code
pub fn result_to_exit_code<T>(result: Result<T, CliError>) -> ExitCode {
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            e.exit_code()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            CliError::InvalidArgs("test".into()).exit_code(),
            ExitCode::from(2)
        );
        assert_eq!(
            CliError::CameraNotFound("test".into()).exit_code(),
            ExitCode::from(3)
        );
        assert_eq!(
            CliError::DriverUnavailable("test".into()).exit_code(),
            ExitCode::from(4)
        );
        assert_eq!(
            CliError::Timeout("test".into()).exit_code(),
            ExitCode::from(6)
        );
        assert_eq!(
            CliError::General("test".into()).exit_code(),
            ExitCode::from(1)
        );
    }

    #[test]
    fn test_error_display() {
        let err = CliError::CameraNotFound("046d:0825".to_string());
        assert_eq!(format!("{}", err), "Camera not found: 046d:0825");
    }

    #[test]
    fn test_error_mapping() {
        let err: CliError = uvcstream::Error::Timeout.into();
        assert!(matches!(err, CliError::Timeout(_)));

        let err: CliError = uvcstream::Error::UnknownControl("Foo".into()).into();
        assert!(matches!(err, CliError::InvalidArgs(_)));
    }
}
