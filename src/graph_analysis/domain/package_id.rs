use crate::shared::Result;
use serde::Serialize;
use std::borrow::Borrow;

/// Maximum length for package names
const MAX_PACKAGE_NAME_LENGTH: usize = 214;

/// Canonical, case-insensitive package identifier.
///
/// Every identifier is trimmed and lower-cased on construction, so `Django`
/// and `django` are the same graph node. Nothing else is normalised: `_` and
/// `-` stay distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PackageId(String);

impl PackageId {
    /// Validates a user-supplied package name and canonicalises it.
    pub fn new(name: &str) -> Result<Self> {
        let trimmed = name.trim();

        if trimmed.is_empty() {
            anyhow::bail!("Package name cannot be empty");
        }

        if trimmed.len() > MAX_PACKAGE_NAME_LENGTH {
            anyhow::bail!(
                "Package name is too long ({} bytes). Maximum allowed: {} bytes",
                trimmed.len(),
                MAX_PACKAGE_NAME_LENGTH
            );
        }

        if let Some(c) = trimmed
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
        {
            anyhow::bail!(
                "Package name '{}' contains invalid character '{}'. Only ASCII letters, digits, hyphens, underscores and dots are allowed.",
                trimmed,
                c
            );
        }

        Ok(Self::canonical(trimmed))
    }

    /// Canonicalises a name coming from package metadata. Never fails; the
    /// caller is expected to discard an empty result.
    pub fn canonical(name: &str) -> Self {
        Self(name.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for PackageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PackageId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lookups in maps keyed by PackageId accept an already-canonical &str.
impl Borrow<str> for PackageId {
    fn borrow(&self) -> &str {
        &self.0
    }
}
