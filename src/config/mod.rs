//! Settings file handling.
//!
//! - [`settings`] - The known keys and the [`SettingsSnapshot`] read from disk
//! - [`env_file`] - Creating, reading, and extracting values from the .env file
//! - [`template`] - Default contents for a newly created settings file

pub mod env_file;
pub mod settings;
pub mod template;

pub use env_file::{EnvFileParser, EnvFileStatus};
pub use settings::{SettingKey, SettingsSnapshot};
pub use template::{TemplateSource, DEFAULT_TEMPLATE};

/// Default settings file name, relative to the project root.
pub const DEFAULT_ENV_FILE: &str = ".env";
