use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookError {
    #[error("{message}")]
    InvalidArgument { message: String },

    #[error("Failed to fetch books: {message}")]
    FetchFailed { message: String },

    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

impl BookError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Wraps any failure from the transport, keeping only its message text
    /// and the text of its causes.
    pub fn fetch_failed(source: impl std::error::Error) -> Self {
        let mut message = source.to_string();
        let mut cause = source.source();
        while let Some(err) = cause {
            let text = err.to_string();
            if !message.contains(&text) {
                message.push_str(": ");
                message.push_str(&text);
            }
            cause = err.source();
        }
        Self::FetchFailed { message }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument { .. } | Self::ConfigError { .. } => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, BookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_failed_message_is_prefixed() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "connection refused");
        let err = BookError::fetch_failed(io);
        assert_eq!(err.to_string(), "Failed to fetch books: connection refused");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_fetch_failed_keeps_only_message_text() {
        let inner = BookError::ConfigError {
            message: "bad".to_string(),
        };
        let err = BookError::fetch_failed(inner);
        assert!(matches!(
            err,
            BookError::FetchFailed { ref message } if message == "Configuration error: bad"
        ));
    }

    #[test]
    fn test_fetch_failed_appends_cause_chain() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused");
        let json = serde_json::Error::io(io);
        let err = BookError::fetch_failed(BookError::Serialization(json));
        assert_eq!(
            err.to_string(),
            "Failed to fetch books: Serialization error: connection refused"
        );

        let outer = std::io::Error::new(std::io::ErrorKind::Other, Wrapper);
        let err = BookError::fetch_failed(outer);
        assert_eq!(
            err.to_string(),
            "Failed to fetch books: error sending request: tcp connect error"
        );
    }

    #[derive(Debug)]
    struct Wrapper;

    impl std::fmt::Display for Wrapper {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("error sending request")
        }
    }

    impl std::error::Error for Wrapper {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            Some(&Inner)
        }
    }

    #[derive(Debug)]
    struct Inner;

    impl std::fmt::Display for Inner {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("tcp connect error")
        }
    }

    impl std::error::Error for Inner {}

    #[test]
    fn test_invalid_argument_exit_code() {
        let err = BookError::invalid_argument("apiUrl is required");
        assert_eq!(err.to_string(), "apiUrl is required");
        assert_eq!(err.exit_code(), 2);
    }
}
