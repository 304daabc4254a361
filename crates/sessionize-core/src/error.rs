use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by sessionize.
#[derive(Error, Debug)]
pub enum SessionError {
    /// A file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A JSON document could not be parsed.
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// A single JSONL line did not decode into a well-formed event.
    #[error("Invalid event on line {line}: {source}")]
    InvalidEvent {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// An input path is neither a file nor a directory.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the sessionize crates.
pub type Result<T> = std::result::Result<T, SessionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_file_read() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = SessionError::FileRead {
            path: PathBuf::from("/some/events.jsonl"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("Failed to read file"));
        assert!(msg.contains("/some/events.jsonl"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_error_display_invalid_event_names_line() {
        let json_err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err = SessionError::InvalidEvent {
            line: 7,
            source: json_err,
        };
        assert!(err.to_string().starts_with("Invalid event on line 7:"));
    }

    #[test]
    fn test_error_display_invalid_input() {
        let err = SessionError::InvalidInput("missing.jsonl is not a file or directory".to_string());
        assert_eq!(err.to_string(), "Invalid input: missing.jsonl is not a file or directory");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: SessionError = io_err.into();
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{invalid}").unwrap_err();
        let err: SessionError = json_err.into();
        assert!(err.to_string().contains("Failed to parse JSON"));
    }
}
