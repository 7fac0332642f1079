use regex::Regex;

use super::version::Version;
use crate::error::{DetectError, Result};

const VERSION_PLACEHOLDER: &str = "{version}";

/// Tag naming pattern (e.g., "v{version}", "release-{version}")
#[derive(Debug, Clone)]
pub struct TagPattern {
    pub pattern: String,
    matcher: Regex,
}

impl TagPattern {
    /// Create a new tag pattern
    ///
    /// The pattern must contain the `{version}` placeholder exactly once.
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        if pattern.matches(VERSION_PLACEHOLDER).count() != 1 {
            return Err(DetectError::tag(format!(
                "Pattern '{}' must contain the {} placeholder once",
                pattern, VERSION_PLACEHOLDER
            )));
        }

        // Escape everything, then let {version} capture anything that starts like X.Y.Z
        let escaped = regex::escape(&pattern);
        let regex_pattern = escaped.replace(r"\{version\}", r"([0-9]+\.[0-9]+\.[0-9]+.*)");
        let matcher = Regex::new(&format!("^{}$", regex_pattern))
            .map_err(|e| DetectError::tag(format!("Invalid pattern '{}': {}", pattern, e)))?;

        Ok(TagPattern { pattern, matcher })
    }

    /// Extract the version text of a tag that fits the pattern
    pub fn version_part<'a>(&self, tag: &'a str) -> Option<&'a str> {
        self.matcher
            .captures(tag)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str())
    }

    /// Parse the version carried by `tag`.
    ///
    /// # Returns
    /// * `None` - The tag does not follow the pattern at all
    /// * `Some(Ok(Version))` - A version tag
    /// * `Some(Err(_))` - The tag looks like a version tag but does not parse
    pub fn parse_tag(&self, tag: &str, loose: bool) -> Option<Result<Version>> {
        self.version_part(tag)
            .map(|version| Version::parse(version, loose))
    }
}
