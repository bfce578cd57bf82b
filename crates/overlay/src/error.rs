//! Error types for the usdm-overlay crate.

use jiff::civil::Date;

/// Error type for all fallible operations in the usdm-overlay crate.
#[derive(Debug, thiserror::Error)]
pub enum OverlayError {
    /// Returned when no boundary dataset has been published for a date. The
    /// date was structurally valid; only its remote artifact is missing.
    #[error("no boundary dataset published for {date}")]
    NotFound {
        /// The release date that was requested.
        date: Date,
    },

    /// Wraps a transport-level HTTP failure.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Wraps a malformed or unexpected payload.
    #[error("malformed boundary dataset: {0}")]
    Decode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    #[test]
    fn not_found_message() {
        let err = OverlayError::NotFound {
            date: date(2023, 3, 7),
        };
        assert_eq!(
            err.to_string(),
            "no boundary dataset published for 2023-03-07"
        );
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<OverlayError>();
    }
}
