//! Known setting keys and the settings snapshot.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// A setting the checker knows about.
///
/// Variants are declared in the order they are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum SettingKey {
    /// Supabase project URL.
    #[serde(rename = "VITE_SUPABASE_URL")]
    SupabaseUrl,
    /// Supabase anonymous API key.
    #[serde(rename = "VITE_SUPABASE_ANON_KEY")]
    SupabaseAnonKey,
    /// Base URL of the payments API server.
    #[serde(rename = "VITE_API_BASE_URL")]
    ApiBaseUrl,
    /// Feature flag enabling Mercado Pago checkout.
    #[serde(rename = "VITE_ENABLE_MP")]
    EnableMp,
    /// Mercado Pago public key.
    #[serde(rename = "VITE_MP_PUBLIC_KEY")]
    MpPublicKey,
    /// URL the local dev server is served on.
    #[serde(rename = "PUBLIC_URL")]
    PublicUrl,
}

impl SettingKey {
    /// All keys, in report order.
    pub const ALL: [SettingKey; 6] = [
        SettingKey::SupabaseUrl,
        SettingKey::SupabaseAnonKey,
        SettingKey::ApiBaseUrl,
        SettingKey::EnableMp,
        SettingKey::MpPublicKey,
        SettingKey::PublicUrl,
    ];

    /// Variable name as written in the settings file.
    pub fn env_name(&self) -> &'static str {
        match self {
            Self::SupabaseUrl => "VITE_SUPABASE_URL",
            Self::SupabaseAnonKey => "VITE_SUPABASE_ANON_KEY",
            Self::ApiBaseUrl => "VITE_API_BASE_URL",
            Self::EnableMp => "VITE_ENABLE_MP",
            Self::MpPublicKey => "VITE_MP_PUBLIC_KEY",
            Self::PublicUrl => "PUBLIC_URL",
        }
    }

    /// Whether the value should be redacted when displayed.
    ///
    /// Public keys are meant to ship to browsers, so only the Supabase
    /// anon key (a signed JWT) is treated as secret-like.
    pub fn is_secret(&self) -> bool {
        matches!(self, Self::SupabaseAnonKey)
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.env_name())
    }
}

/// Settings read from the settings file at startup.
///
/// Built once by [`EnvFileParser::snapshot`](super::EnvFileParser::snapshot)
/// and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsSnapshot {
    path: PathBuf,
    values: BTreeMap<SettingKey, Option<String>>,
}

impl SettingsSnapshot {
    /// Create a snapshot from already-extracted values.
    ///
    /// Keys absent from `values` are recorded as missing.
    pub fn new(path: impl Into<PathBuf>, mut values: BTreeMap<SettingKey, String>) -> Self {
        let values = SettingKey::ALL
            .iter()
            .map(|key| (*key, values.remove(key)))
            .collect();

        Self {
            path: path.into(),
            values,
        }
    }

    /// A snapshot with every key missing.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self::new(path, BTreeMap::new())
    }

    /// Path of the settings file this snapshot was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get a setting value, if present.
    pub fn get(&self, key: SettingKey) -> Option<&str> {
        self.values.get(&key).and_then(|v| v.as_deref())
    }

    /// Iterate over every known key in report order.
    pub fn iter(&self) -> impl Iterator<Item = (SettingKey, Option<&str>)> {
        self.values.iter().map(|(k, v)| (*k, v.as_deref()))
    }

    /// Keys with no value.
    pub fn missing(&self) -> Vec<SettingKey> {
        self.iter()
            .filter(|(_, v)| v.is_none())
            .map(|(k, _)| k)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_keys_are_unique() {
        let mut names: Vec<_> = SettingKey::ALL.iter().map(|k| k.env_name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 6);
    }

    #[test]
    fn only_anon_key_is_secret() {
        let secrets: Vec<_> = SettingKey::ALL.iter().filter(|k| k.is_secret()).collect();
        assert_eq!(secrets, vec![&SettingKey::SupabaseAnonKey]);
    }

    #[test]
    fn display_uses_env_name() {
        assert_eq!(SettingKey::EnableMp.to_string(), "VITE_ENABLE_MP");
    }

    #[test]
    fn empty_snapshot_reports_every_key_missing() {
        let snapshot = SettingsSnapshot::empty(".env");
        assert_eq!(snapshot.missing().len(), 6);
        assert_eq!(snapshot.path(), Path::new(".env"));
    }

    #[test]
    fn snapshot_get_returns_present_values() {
        let mut values = BTreeMap::new();
        values.insert(SettingKey::EnableMp, "true".to_string());
        let snapshot = SettingsSnapshot::new(".env", values);

        assert_eq!(snapshot.get(SettingKey::EnableMp), Some("true"));
        assert_eq!(snapshot.get(SettingKey::SupabaseUrl), None);
        assert_eq!(snapshot.missing().len(), 5);
    }

    #[test]
    fn iter_follows_declaration_order() {
        let snapshot = SettingsSnapshot::empty(".env");
        let keys: Vec<_> = snapshot.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, SettingKey::ALL.to_vec());
    }

    #[test]
    fn key_serializes_as_env_name() {
        let json = serde_json::to_string(&SettingKey::SupabaseAnonKey).unwrap();
        assert_eq!(json, "\"VITE_SUPABASE_ANON_KEY\"");
    }
}
