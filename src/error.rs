//! Error types for the deckcheck library.

use std::io;
use thiserror::Error;

/// Result type alias for deckcheck operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during extraction or fact-checking.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The archive could not be opened: missing file or invalid ZIP structure.
    #[error("cannot open archive: {0}")]
    ArchiveOpen(String),

    /// One archive entry's data could not be read or decompressed.
    #[error("cannot read archive entry '{path}': {reason}")]
    EntryRead { path: String, reason: String },

    /// A slide part's XML failed to parse.
    #[error("malformed slide markup in '{part}': {reason}")]
    MalformedMarkup { part: String, reason: String },

    /// The speech-to-text service reported a failure.
    #[error("transcription failed: {0}")]
    Transcription(String),

    /// The fact-check model returned no usable content.
    #[error("fact-check completion failed: {0}")]
    Completion(String),

    /// HTTP transport error talking to an external service.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::ArchiveOpen("no such file".to_string());
        assert_eq!(err.to_string(), "cannot open archive: no such file");

        let err = Error::MalformedMarkup {
            part: "ppt/slides/slide1.xml".to_string(),
            reason: "unexpected end of file".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "malformed slide markup in 'ppt/slides/slide1.xml': unexpected end of file"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
