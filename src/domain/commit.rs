use std::sync::LazyLock;

use regex::Regex;

use crate::error::{DetectError, Result};

/// Marker that flags a commit as breaking wherever it appears.
pub const BREAKING_CHANGE_MARKER: &str = "BREAKING CHANGE:";

static HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z][\w-]*)(?:\(([^)]*)\))?(!?):\s*(.+)$")
        .unwrap_or_else(|e| panic!("invalid commit header pattern: {e}"))
});

static FOOTER_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:BREAKING CHANGE|BREAKING-CHANGE|[\w-]+)(?:: | #)")
        .unwrap_or_else(|e| panic!("invalid footer pattern: {e}"))
});

/// Parsed representation of a conventional commit message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommit {
    pub r#type: String,
    pub scope: Option<String>,
    pub subject: String,
    pub header: String,
    pub body: Option<String>,
    pub footer: Option<String>,
    pub is_breaking_change: bool,
}

impl ParsedCommit {
    /// Parse a commit message according to conventional commits
    /// Supports headers:
    /// - type(scope)!: subject
    /// - type(scope): subject
    /// - type!: subject
    /// - type: subject
    ///
    /// Anything after the header is split in blank-line separated paragraphs;
    /// a trailing paragraph that starts with a footer token (`Token: value`,
    /// `Token #value`, `BREAKING CHANGE: ...`) is the footer.
    pub fn parse(message: &str) -> Result<Self> {
        Self::parse_with_indicators(message, &[BREAKING_CHANGE_MARKER.to_string()])
    }

    /// Parse with a custom list of breaking-change markers.
    ///
    /// The commit is breaking when the header carries `!` or any marker is a
    /// substring of the subject, body or footer.
    pub fn parse_with_indicators(message: &str, indicators: &[String]) -> Result<Self> {
        let message = message.trim();
        let mut lines = message.lines();
        let header = lines.next().unwrap_or_default().trim_end().to_string();

        let captures = HEADER.captures(&header).ok_or_else(|| {
            DetectError::commit(format!("'{}' has no 'type(scope): subject' header", header))
        })?;

        let r#type = captures
            .get(1)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();
        let scope = captures
            .get(2)
            .map(|m| m.as_str().trim().to_string())
            .filter(|s| !s.is_empty());
        let has_exclamation = captures.get(3).map(|m| m.as_str()) == Some("!");
        let subject = captures
            .get(4)
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default();

        let rest = lines.collect::<Vec<_>>().join("\n");
        let mut paragraphs: Vec<&str> = rest
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect();

        let footer = match paragraphs.last() {
            Some(last) if FOOTER_TOKEN.is_match(last) => paragraphs.pop().map(str::to_string),
            _ => None,
        };
        let body = if paragraphs.is_empty() {
            None
        } else {
            Some(paragraphs.join("\n\n"))
        };

        let mentions_breaking = |text: &str| indicators.iter().any(|marker| text.contains(marker));
        let is_breaking_change = has_exclamation
            || mentions_breaking(&subject)
            || mentions_breaking(body.as_deref().unwrap_or(""))
            || mentions_breaking(footer.as_deref().unwrap_or(""));

        Ok(ParsedCommit {
            r#type,
            scope,
            subject,
            header,
            body,
            footer,
            is_breaking_change,
        })
    }
}
