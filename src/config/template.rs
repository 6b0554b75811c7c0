//! Default settings file template.
//!
//! The built-in template is embedded from `templates/default.env`. A
//! project can supply its own with `--template` or `ENVDOCTOR_TEMPLATE`.

use std::path::{Path, PathBuf};

use crate::error::{DoctorError, Result};

/// Built-in template contents.
pub const DEFAULT_TEMPLATE: &str = include_str!("../../templates/default.env");

/// Where the contents of a newly created settings file come from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TemplateSource {
    /// The embedded default template.
    #[default]
    Builtin,
    /// A user-supplied template file.
    File(PathBuf),
}

impl TemplateSource {
    /// Pick a source from an optional override path.
    pub fn from_override(path: Option<&Path>) -> Self {
        match path {
            Some(p) => Self::File(p.to_path_buf()),
            None => Self::Builtin,
        }
    }

    /// Load the template text.
    pub fn load(&self) -> Result<String> {
        match self {
            Self::Builtin => Ok(DEFAULT_TEMPLATE.to_string()),
            Self::File(path) => {
                std::fs::read_to_string(path).map_err(|source| DoctorError::TemplateRead {
                    path: path.clone(),
                    source,
                })
            }
        }
    }
}
