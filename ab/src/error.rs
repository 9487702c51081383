//! Error types for loading and saving address books

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while moving an address book to or from text
#[derive(Debug, Error)]
pub enum BookError {
    #[error("Failed to open {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error on {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed record on line {line}: missing ';' in {content:?}")]
    Malformed { line: usize, content: String },
}

impl BookError {
    /// Attach a path to a bare I/O error raised after the file was opened
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_open_message_names_path() {
        let err = BookError::Open {
            path: PathBuf::from("/no/such/book.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };

        let msg = err.to_string();
        assert!(msg.contains("/no/such/book.txt"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_malformed_message() {
        let err = BookError::Malformed {
            line: 3,
            content: "no separator".to_string(),
        };

        let msg = err.to_string();
        assert!(msg.contains("line 3"));
        assert!(msg.contains("no separator"));
    }
}
