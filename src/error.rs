// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Failures surfaced by the landing page components.
///
/// Each component fails in isolation: a bad rotation list only affects the
/// rotator being built, and a rejected submission leaves the form untouched.
/// Double-dismiss, double-stop and similar repeats are never errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A component was built with values it cannot run with
    /// (empty rotation list, zero or inverted timings).
    InvalidConfiguration(String),

    /// User input was rejected (blank e-mail address).
    Validation(String),

    /// A simulated submission is already in flight.
    SubmissionPending,

    Io(String),
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidConfiguration(e) => write!(f, "Invalid configuration: {}", e),
            Error::Validation(e) => write!(f, "Validation Error: {}", e),
            Error::SubmissionPending => write!(f, "A submission is already in progress"),
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn invalid_configuration_mentions_cause() {
        let err = Error::InvalidConfiguration("rotation list is empty".into());
        assert!(format!("{}", err).contains("rotation list is empty"));
    }

    #[test]
    fn toml_parse_errors_become_config_errors() {
        let err: Error = toml::from_str::<toml::Table>("not = valid = toml")
            .unwrap_err()
            .into();
        assert!(matches!(err, Error::Config(_)));
    }
}
