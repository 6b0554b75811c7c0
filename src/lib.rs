//! envdoctor - Local environment configuration checker.
//!
//! envdoctor checks that a project's `.env` file exists and declares the
//! settings the web client needs for its Supabase and Mercado Pago
//! backends, then confirms both backends answer a liveness probe.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and the check command
//! - [`config`] - Settings file creation, reading, and key extraction
//! - [`error`] - Error types and result aliases
//! - [`probes`] - HTTP reachability probes
//! - [`report`] - Collected results and JSON output
//! - [`secrets`] - Redacted previews of secret values
//! - [`ui`] - Colored terminal output
//!
//! # Example
//!
//! ```
//! use envdoctor::config::{EnvFileParser, SettingKey};
//!
//! let values = EnvFileParser::parse("VITE_ENABLE_MP=true\n");
//! assert_eq!(values.get(&SettingKey::EnableMp).map(String::as_str), Some("true"));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod probes;
pub mod report;
pub mod secrets;
pub mod ui;

pub use error::{DoctorError, Result};
