//! Matched-file selection.

use std::fmt;

use super::error::DomainError;

/// Suffixes that select which directory entries get optimized.
///
/// Matching is a plain, case-sensitive `ends_with` on the entry name, so
/// `app.min.js` matches `.js` while `APP.JS` and `app.mjs` do not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetFilter {
    suffixes: Vec<String>,
}

impl AssetFilter {
    /// Build a filter from extensions given with or without a leading dot.
    pub fn new<I, S>(extensions: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut suffixes: Vec<String> = Vec::new();

        for ext in extensions {
            let ext = ext.as_ref().trim();
            let bare = ext.strip_prefix('.').unwrap_or(ext);

            if bare.is_empty() {
                return Err(DomainError::InvalidExtension {
                    extension: ext.to_string(),
                    reason: "extension is empty".into(),
                });
            }
            if bare.contains(['/', '\\']) {
                return Err(DomainError::InvalidExtension {
                    extension: ext.to_string(),
                    reason: "extension cannot contain a path separator".into(),
                });
            }

            let suffix = format!(".{bare}");
            if !suffixes.contains(&suffix) {
                suffixes.push(suffix);
            }
        }

        if suffixes.is_empty() {
            return Err(DomainError::EmptyFilter);
        }

        Ok(Self { suffixes })
    }

    /// Whether `name` is a matched file.
    pub fn matches(&self, name: &str) -> bool {
        self.suffixes.iter().any(|s| name.ends_with(s.as_str()))
    }

    /// The normalized suffixes, leading dot included.
    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }
}

impl Default for AssetFilter {
    /// `.js` and `.css`.
    fn default() -> Self {
        Self {
            suffixes: vec![".js".into(), ".css".into()],
        }
    }
}

impl fmt::Display for AssetFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.suffixes.join(", "))
    }
}
