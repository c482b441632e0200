//! Error types for the media-type crate.

use thiserror::Error;

/// The main error type for the media-type crate.
///
/// Every variant carries the exact string that was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Top-level type outside the closed set
    #[error("invalid top level type: {0:?}")]
    InvalidTopLevel(String),

    /// Subtype, suffix or parameter name not a restricted name
    #[error("invalid format: {0:?}")]
    InvalidFormat(String),

    /// Parameter fragment matching neither the token nor the quoted shape
    #[error("invalid parameter: {0:?}")]
    InvalidParameter(String),

    /// Whole input not a media type string
    #[error("invalid media type: {0:?}")]
    InvalidMediaType(String),
}

impl Error {
    /// Returns the rejected input carried by this error.
    pub fn value(&self) -> &str {
        match self {
            Error::InvalidTopLevel(v)
            | Error::InvalidFormat(v)
            | Error::InvalidParameter(v)
            | Error::InvalidMediaType(v) => v,
        }
    }
}

/// Specialized Result type for media type operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidTopLevel("unknown".to_string());
        assert_eq!(err.to_string(), "invalid top level type: \"unknown\"");

        let err = Error::InvalidFormat("-json".to_string());
        assert_eq!(err.to_string(), "invalid format: \"-json\"");

        let err = Error::InvalidParameter("charset".to_string());
        assert_eq!(err.to_string(), "invalid parameter: \"charset\"");

        let err = Error::InvalidMediaType("text".to_string());
        assert_eq!(err.to_string(), "invalid media type: \"text\"");
    }

    #[test]
    fn test_error_value() {
        assert_eq!(Error::InvalidTopLevel("foo".to_string()).value(), "foo");
        assert_eq!(Error::InvalidFormat("".to_string()).value(), "");
        assert_eq!(
            Error::InvalidMediaType("a b".to_string()).value(),
            "a b"
        );
    }

    #[test]
    fn test_error_debug() {
        let err = Error::InvalidFormat("test".to_string());
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("InvalidFormat"));
    }

    #[test]
    fn test_result_type() {
        let ok_result: Result<i32> = Ok(42);
        assert_eq!(ok_result.unwrap(), 42);

        let err_result: Result<i32> = Err(Error::InvalidFormat("error".to_string()));
        assert!(err_result.is_err());
    }
}
