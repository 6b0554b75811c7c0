//! The collected outcome of one check run.
//!
//! [`CheckReport`] is what `--json` prints. It never carries a raw secret:
//! secret-like settings only appear as their redacted preview.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

use crate::config::{EnvFileStatus, SettingKey, SettingsSnapshot};
use crate::error::Result;
use crate::probes::ProbeReport;
use crate::secrets::SecretPreview;

/// What happened to the settings file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EnvFileCheck {
    /// The file already existed.
    Found,
    /// The file was created from the template.
    Created,
    /// The file could not be created or read.
    Error { message: String },
}

impl From<EnvFileStatus> for EnvFileCheck {
    fn from(status: EnvFileStatus) -> Self {
        match status {
            EnvFileStatus::Found => Self::Found,
            EnvFileStatus::Created => Self::Created,
        }
    }
}

/// One setting as it should be displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingCheck {
    pub key: SettingKey,
    pub present: bool,
    /// The value, or its redacted preview for secret-like keys.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
}

impl SettingCheck {
    /// Build display entries for every key in `snapshot`.
    pub fn from_snapshot(snapshot: &SettingsSnapshot, preview: &SecretPreview) -> Vec<Self> {
        snapshot
            .iter()
            .map(|(key, value)| SettingCheck {
                key,
                present: value.is_some(),
                display: value.map(|v| {
                    if key.is_secret() {
                        preview.render(v)
                    } else {
                        v.to_string()
                    }
                }),
            })
            .collect()
    }
}

/// Everything a check run found.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub checked_at: DateTime<Utc>,
    pub env_file: PathBuf,
    pub env_file_check: EnvFileCheck,
    pub settings: Vec<SettingCheck>,
    pub probes: Vec<ProbeReport>,
}

impl CheckReport {
    /// Keys reported missing.
    pub fn missing_settings(&self) -> Vec<SettingKey> {
        self.settings
            .iter()
            .filter(|s| !s.present)
            .map(|s| s.key)
            .collect()
    }

    /// Whether every setting is present and no probe failed.
    pub fn is_healthy(&self) -> bool {
        !matches!(self.env_file_check, EnvFileCheck::Error { .. })
            && self.settings.iter().all(|s| s.present)
            && self.probes.iter().all(|p| !p.outcome.is_failure())
    }

    /// Write as pretty-printed JSON followed by a newline.
    pub fn write_json<W: Write>(&self, mut out: W) -> Result<()> {
        serde_json::to_writer_pretty(&mut out, self).map_err(std::io::Error::from)?;
        writeln!(out)?;
        Ok(())
    }
}
