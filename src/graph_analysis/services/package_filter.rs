use crate::shared::Result;
use std::cell::Cell;

/// Maximum number of exclude patterns
const MAX_EXCLUDE_PATTERNS: usize = 64;

/// Maximum length of a single exclude pattern
const MAX_PATTERN_LENGTH: usize = 255;

/// PackageFilter - keeps excluded packages out of the dependency graph
///
/// Patterns use `*` for "any run of characters" and are matched against
/// canonical (lower-case) package ids, so matching is case-insensitive.
/// An excluded package is never expanded and never recorded as anybody's
/// dependency.
#[derive(Debug)]
pub struct PackageFilter {
    patterns: Vec<ExcludePattern>,
}

impl PackageFilter {
    /// # Errors
    /// - more than `MAX_EXCLUDE_PATTERNS` patterns
    /// - a pattern that is empty, too long, only wildcards, or uses
    ///   characters outside `[A-Za-z0-9._-*]`
    pub fn new(patterns: Vec<String>) -> Result<Self> {
        if patterns.len() > MAX_EXCLUDE_PATTERNS {
            anyhow::bail!(
                "Too many exclusion patterns: {} (maximum: {})",
                patterns.len(),
                MAX_EXCLUDE_PATTERNS
            );
        }

        let patterns = patterns
            .into_iter()
            .map(ExcludePattern::new)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// Builds a filter from exclusion patterns plus the configuration's
    /// `filter_substring`, which excludes any package whose name contains it.
    ///
    /// Returns `None` when there is nothing to exclude.
    pub fn from_config(patterns: &[String], substring: Option<&str>) -> Result<Option<Self>> {
        let mut all: Vec<String> = patterns.to_vec();
        if let Some(substring) = substring.map(str::trim).filter(|s| !s.is_empty()) {
            all.push(format!("*{}*", substring));
        }

        if all.is_empty() {
            return Ok(None);
        }
        Self::new(all).map(Some)
    }

    /// True if `package_name` matches any pattern.
    pub fn is_excluded(&self, package_name: &str) -> bool {
        let name = package_name.to_lowercase();
        // No short-circuit: every matching pattern gets marked as used.
        self.patterns
            .iter()
            .fold(false, |excluded, p| p.matches(&name) || excluded)
    }

    /// Patterns that have not excluded anything so far.
    pub fn unmatched_patterns(&self) -> Vec<&str> {
        self.patterns
            .iter()
            .filter(|p| !p.matched.get())
            .map(|p| p.original.as_str())
            .collect()
    }
}

/// One validated pattern, split at its wildcards.
#[derive(Debug)]
struct ExcludePattern {
    original: String,
    parts: Vec<String>,
    anchored_start: bool,
    anchored_end: bool,
    matched: Cell<bool>,
}

impl ExcludePattern {
    fn new(pattern: String) -> Result<Self> {
        validate_pattern(&pattern)?;

        let lowered = pattern.to_lowercase();
        let parts = lowered
            .split('*')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self {
            anchored_start: !lowered.starts_with('*'),
            anchored_end: !lowered.ends_with('*'),
            parts,
            original: pattern,
            matched: Cell::new(false),
        })
    }

    fn matches(&self, name: &str) -> bool {
        let is_match = self.glob_match(name);
        if is_match {
            self.matched.set(true);
        }
        is_match
    }

    fn glob_match(&self, name: &str) -> bool {
        let mut remaining = name;
        let mut parts = self.parts.as_slice();

        if self.anchored_start {
            let Some((first, rest)) = parts.split_first() else {
                return false;
            };
            let Some(tail) = remaining.strip_prefix(first.as_str()) else {
                return false;
            };
            remaining = tail;
            parts = rest;
        }

        if self.anchored_end {
            match parts.split_last() {
                Some((last, rest)) => {
                    let Some(head) = remaining.strip_suffix(last.as_str()) else {
                        return false;
                    };
                    remaining = head;
                    parts = rest;
                }
                // Pattern without wildcards, already consumed as the prefix.
                None => return remaining.is_empty(),
            }
        }

        for part in parts {
            match remaining.find(part.as_str()) {
                Some(pos) => remaining = &remaining[pos + part.len()..],
                None => return false,
            }
        }

        true
    }
}

fn validate_pattern(pattern: &str) -> Result<()> {
    if pattern.is_empty() {
        anyhow::bail!("Exclusion pattern cannot be empty");
    }

    if pattern.len() > MAX_PATTERN_LENGTH {
        anyhow::bail!(
            "Exclusion pattern is too long ({} chars). Maximum: {} chars",
            pattern.len(),
            MAX_PATTERN_LENGTH
        );
    }

    if let Some(ch) = pattern
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '*')))
    {
        anyhow::bail!(
            "Exclusion pattern '{}' contains invalid character '{}'. \
             Only ASCII letters, digits, hyphens, underscores, dots and asterisks (*) are allowed.",
            pattern,
            ch
        );
    }

    if pattern.chars().all(|c| c == '*') {
        anyhow::bail!(
            "Exclusion pattern cannot contain only wildcards: '{}'",
            pattern
        );
    }

    Ok(())
}
