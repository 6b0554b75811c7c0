//! .env file handling.
//!
//! This module creates the settings file when it is missing and extracts
//! the known settings from it. Extraction is regex based: each key takes
//! the first line of the form `KEY=value` (optionally prefixed with
//! `export`), so later duplicates are ignored.

use regex::Regex;
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{DoctorError, Result};

use super::settings::{SettingKey, SettingsSnapshot};
use super::template::TemplateSource;

/// Whether [`EnvFileParser::ensure_exists`] had to create the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvFileStatus {
    /// The file was already present.
    Found,
    /// The file was missing and has been written from the template.
    Created,
}

/// Reads settings out of a .env file.
///
/// # Example
///
/// ```
/// use envdoctor::config::{EnvFileParser, SettingKey};
///
/// let content = r#"
/// # Payments
/// VITE_API_BASE_URL=http://localhost:3000
/// VITE_ENABLE_MP=true
/// "#;
///
/// assert_eq!(
///     EnvFileParser::extract(content, SettingKey::ApiBaseUrl),
///     Some("http://localhost:3000".to_string())
/// );
/// assert_eq!(EnvFileParser::extract(content, SettingKey::MpPublicKey), None);
/// ```
pub struct EnvFileParser;

impl EnvFileParser {
    /// Write the template to `path` if nothing exists there yet.
    pub fn ensure_exists(path: &Path, template: &TemplateSource) -> Result<EnvFileStatus> {
        if path.exists() {
            tracing::debug!("Settings file found at {}", path.display());
            return Ok(EnvFileStatus::Found);
        }

        let content = template.load()?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| DoctorError::EnvFileWrite {
                path: path.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(path, content).map_err(|source| DoctorError::EnvFileWrite {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!("Created settings file at {}", path.display());
        Ok(EnvFileStatus::Created)
    }

    /// Extract a single setting from file contents.
    ///
    /// Returns the trimmed value of the first matching line. Empty values
    /// count as missing.
    pub fn extract(content: &str, key: SettingKey) -> Option<String> {
        let pattern = format!(
            r"(?m)^[ \t]*(?:export[ \t]+)?{}=(.+)$",
            regex::escape(key.env_name())
        );
        // The key names are fixed identifiers, so the pattern always compiles.
        let re = Regex::new(&pattern).ok()?;

        let value = re.captures(content)?.get(1)?.as_str().trim();
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }

    /// Extract every known setting from file contents.
    pub fn parse(content: &str) -> BTreeMap<SettingKey, String> {
        SettingKey::ALL
            .iter()
            .filter_map(|key| Self::extract(content, *key).map(|v| (*key, v)))
            .collect()
    }

    /// Read the file at `path` and build a snapshot of its settings.
    ///
    /// The file is read in full and closed before this returns.
    pub fn snapshot(path: &Path) -> Result<SettingsSnapshot> {
        let content =
            std::fs::read_to_string(path).map_err(|source| DoctorError::EnvFileRead {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(SettingsSnapshot::new(path, Self::parse(&content)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::template::DEFAULT_TEMPLATE;
    use tempfile::TempDir;

    #[test]
    fn extracts_simple_value() {
        let content = "VITE_ENABLE_MP=true\n";
        assert_eq!(
            EnvFileParser::extract(content, SettingKey::EnableMp),
            Some("true".to_string())
        );
    }

    #[test]
    fn trims_trailing_whitespace() {
        let content = "VITE_ENABLE_MP=true   \r\n";
        assert_eq!(
            EnvFileParser::extract(content, SettingKey::EnableMp),
            Some("true".to_string())
        );
    }

    #[test]
    fn first_match_wins() {
        let content = "VITE_ENABLE_MP=true\nVITE_ENABLE_MP=false\n";
        assert_eq!(
            EnvFileParser::extract(content, SettingKey::EnableMp),
            Some("true".to_string())
        );
    }

    #[test]
    fn empty_value_is_missing() {
        let content = "VITE_ENABLE_MP=\nVITE_MP_PUBLIC_KEY=   \n";
        assert_eq!(EnvFileParser::extract(content, SettingKey::EnableMp), None);
        assert_eq!(EnvFileParser::extract(content, SettingKey::MpPublicKey), None);
    }

    #[test]
    fn accepts_export_prefix() {
        let content = "export VITE_SUPABASE_URL=https://abc.supabase.co\n";
        assert_eq!(
            EnvFileParser::extract(content, SettingKey::SupabaseUrl),
            Some("https://abc.supabase.co".to_string())
        );
    }

    #[test]
    fn commented_lines_do_not_match() {
        let content = "# VITE_ENABLE_MP=true\n";
        assert_eq!(EnvFileParser::extract(content, SettingKey::EnableMp), None);
    }

    #[test]
    fn public_url_does_not_match_prefixed_names() {
        let content = "VITE_PUBLIC_URL=http://elsewhere\n";
        assert_eq!(EnvFileParser::extract(content, SettingKey::PublicUrl), None);
    }

    #[test]
    fn values_keep_embedded_equals() {
        let content = "VITE_API_BASE_URL=https://api.example.com?token=abc\n";
        assert_eq!(
            EnvFileParser::extract(content, SettingKey::ApiBaseUrl),
            Some("https://api.example.com?token=abc".to_string())
        );
    }

    #[test]
    fn parses_every_key_from_default_template() {
        let values = EnvFileParser::parse(DEFAULT_TEMPLATE);
        assert_eq!(values.len(), 6);
        assert_eq!(
            values.get(&SettingKey::PublicUrl).map(String::as_str),
            Some("http://localhost:5173")
        );
    }

    #[test]
    fn ensure_exists_creates_missing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".env");

        let status = EnvFileParser::ensure_exists(&path, &TemplateSource::Builtin).unwrap();

        assert_eq!(status, EnvFileStatus::Created);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_TEMPLATE);
    }

    #[test]
    fn ensure_exists_reports_found_on_second_pass() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".env");

        EnvFileParser::ensure_exists(&path, &TemplateSource::Builtin).unwrap();
        let status = EnvFileParser::ensure_exists(&path, &TemplateSource::Builtin).unwrap();

        assert_eq!(status, EnvFileStatus::Found);
    }

    #[test]
    fn ensure_exists_leaves_existing_file_untouched() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".env");
        std::fs::write(&path, "VITE_ENABLE_MP=false\n").unwrap();

        EnvFileParser::ensure_exists(&path, &TemplateSource::Builtin).unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "VITE_ENABLE_MP=false\n"
        );
    }

    #[test]
    fn ensure_exists_creates_parent_directories() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config/local/.env");

        let status = EnvFileParser::ensure_exists(&path, &TemplateSource::Builtin).unwrap();

        assert_eq!(status, EnvFileStatus::Created);
        assert!(path.exists());
    }

    #[test]
    fn ensure_exists_propagates_template_errors() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".env");
        let template = TemplateSource::File(temp.path().join("missing.env"));

        let err = EnvFileParser::ensure_exists(&path, &template).unwrap_err();

        assert!(matches!(err, DoctorError::TemplateRead { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn snapshot_reads_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".env");
        std::fs::write(&path, "VITE_SUPABASE_URL=https://abc.supabase.co\n").unwrap();

        let snapshot = EnvFileParser::snapshot(&path).unwrap();

        assert_eq!(
            snapshot.get(SettingKey::SupabaseUrl),
            Some("https://abc.supabase.co")
        );
        assert_eq!(snapshot.missing().len(), 5);
    }

    #[test]
    fn snapshot_of_missing_file_is_read_error() {
        let err = EnvFileParser::snapshot(Path::new("/nonexistent/.env")).unwrap_err();
        assert!(matches!(err, DoctorError::EnvFileRead { .. }));
    }
}
