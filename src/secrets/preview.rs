//! Redacted previews of secret values.

/// Renders secret-like values as `head...tail`.
///
/// Values no longer than `threshold` characters are shown unchanged, since
/// eliding would hide nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecretPreview {
    /// Number of leading characters kept.
    pub head: usize,
    /// Number of trailing characters kept.
    pub tail: usize,
    /// Length above which values are shortened.
    pub threshold: usize,
}

impl Default for SecretPreview {
    fn default() -> Self {
        Self {
            head: 20,
            tail: 5,
            threshold: 30,
        }
    }
}

impl SecretPreview {
    /// Render a preview of `value`.
    pub fn render(&self, value: &str) -> String {
        let len = value.chars().count();
        if len <= self.threshold {
            return value.to_string();
        }

        let head: String = value.chars().take(self.head).collect();
        let tail: String = value.chars().skip(len.saturating_sub(self.tail)).collect();
        format!("{}...{}", head, tail)
    }
}

/// Keep at most `max` characters of `text`.
///
/// Counts characters rather than bytes so multi-byte text never splits
/// mid-codepoint.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
