use thiserror::Error;

/// subtrack error types
#[derive(Error, Debug)]
pub enum SubtrackError {
    /// Subscription store could not be read
    #[error("store error: {0}")]
    Store(String),

    /// File I/O error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Rate provider unreachable or transport failed
    #[error("rate fetch error: {0}")]
    RateFetch(String),

    /// Rate provider payload failed shape validation
    #[error("rate schema error: {0}")]
    RateSchema(String),

    /// A currency that passed the exchangeability filter had no rate
    /// at conversion time. Programming error, not an upstream fault.
    #[error("aggregation inconsistency: {0}")]
    Inconsistency(String),

    /// Configuration error
    #[error("config error: {0}")]
    Config(String),
}

/// Result type alias for subtrack
pub type Result<T> = std::result::Result<T, SubtrackError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SubtrackError::Store("connection refused".into());
        assert_eq!(err.to_string(), "store error: connection refused");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: SubtrackError = io_err.into();
        assert!(err.to_string().contains("io error"));
    }

    #[test]
    fn test_inconsistency_display() {
        let err = SubtrackError::Inconsistency("no rate for EUR".into());
        assert_eq!(
            err.to_string(),
            "aggregation inconsistency: no rate for EUR"
        );
    }
}
