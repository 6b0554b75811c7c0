//! Error types for envdoctor operations.
//!
//! This module defines [`DoctorError`], the error type used throughout the
//! checker, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Every check catches its own errors and reports them through the UI
//! - Errors never change the process exit code
//! - Messages should read well when printed verbatim after "Error:"

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for envdoctor operations.
#[derive(Debug, Error)]
pub enum DoctorError {
    /// The settings file could not be created.
    #[error("Failed to write {path}: {source}")]
    EnvFileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings file exists but could not be read.
    #[error("Failed to read {path}: {source}")]
    EnvFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A user-supplied template could not be read.
    #[error("Failed to read template {path}: {source}")]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configured URL could not be parsed into scheme and host.
    #[error("Invalid URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    /// HTTP transport failure (connection refused, timeout, DNS, ...).
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// Writing the report failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for envdoctor operations.
pub type Result<T> = std::result::Result<T, DoctorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_file_write_displays_path_and_cause() {
        let err = DoctorError::EnvFileWrite {
            path: PathBuf::from("/readonly/.env"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/readonly/.env"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn env_file_read_displays_path() {
        let err = DoctorError::EnvFileRead {
            path: PathBuf::from("project/.env"),
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, "not utf-8"),
        };
        assert!(err.to_string().contains("project/.env"));
    }

    #[test]
    fn template_read_displays_path() {
        let err = DoctorError::TemplateRead {
            path: PathBuf::from("custom.env"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        let msg = err.to_string();
        assert!(msg.contains("template"));
        assert!(msg.contains("custom.env"));
    }

    #[test]
    fn invalid_url_displays_url_and_message() {
        let err = DoctorError::InvalidUrl {
            url: "not a url".into(),
            message: "relative URL without a base".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("not a url"));
        assert!(msg.contains("relative URL without a base"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: DoctorError = io_err.into();
        assert!(matches!(err, DoctorError::Io(_)));
    }
}
