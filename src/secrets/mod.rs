//! Secret redaction for display.
//!
//! - [`SecretPreview`] - Shortens secret-like values to a recognisable preview
//! - [`truncate_chars`] - Character-safe truncation for arbitrary text
//!
//! # Example
//!
//! ```
//! use envdoctor::secrets::SecretPreview;
//!
//! let preview = SecretPreview::default();
//! let jwt = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.payload.signature";
//! assert_eq!(preview.render(jwt), "eyJhbGciOiJIUzI1NiIs...ature");
//! assert_eq!(preview.render("short"), "short");
//! ```

pub mod preview;

pub use preview::{truncate_chars, SecretPreview};
