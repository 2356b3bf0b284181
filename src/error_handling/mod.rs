//! Error handling.
//!
//! Library functions return these typed errors; the binary wraps them in
//! `anyhow` for reporting.

mod types;

// Re-export public API
pub use types::{ExportError, InitializationError};

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};
    use std::path::PathBuf;

    #[test]
    fn test_io_error_names_path() {
        let err = ExportError::io(
            PathBuf::from("metadata/r1.json"),
            Error::new(ErrorKind::PermissionDenied, "permission denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("metadata/r1.json"), "got: {msg}");
        assert!(msg.contains("permission denied"), "got: {msg}");
    }

    #[test]
    fn test_io_error_exposes_source() {
        use std::error::Error as _;
        let err = ExportError::io("out", Error::new(ErrorKind::NotFound, "gone"));
        assert!(err.source().is_some());
    }
}
