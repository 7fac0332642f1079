//! Commit classification
//!
//! A commit maps to a bump through an explicit, ordered rule list. Rules are
//! evaluated strictly in priority order (major, then minor, then patch) and
//! the first match wins, so a type matching several keyword lists always gets
//! the most significant bump.

use crate::config::ConventionalCommitsConfig;
use crate::domain::{ParsedCommit, VersionBump};

/// One classification rule: any keyword found in the commit type selects `bump`
#[derive(Debug, Clone, PartialEq)]
struct Rule {
    bump: VersionBump,
    keywords: Vec<String>,
}

impl Rule {
    fn matches(&self, commit_type: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| !keyword.is_empty() && commit_type.contains(keyword.as_str()))
    }
}

/// Maps commit types to version bumps
#[derive(Debug, Clone, PartialEq)]
pub struct Classifier {
    rules: Vec<Rule>,
}

impl Classifier {
    /// Build the rule list from configured keywords, highest priority first
    pub fn new(config: &ConventionalCommitsConfig) -> Self {
        let rule = |bump, keywords: &[String]| Rule {
            bump,
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
        };

        Classifier {
            rules: vec![
                rule(VersionBump::Major, &config.major_keywords),
                rule(VersionBump::Minor, &config.minor_keywords),
                rule(VersionBump::Patch, &config.patch_keywords),
            ],
        }
    }

    /// Classify a commit by its type and breaking flag.
    ///
    /// A breaking commit is always `Major`. Otherwise the type is lowercased
    /// and checked for keyword substrings (`patchwork` counts as `patch`).
    /// `None` means the commit has no version impact.
    ///
    /// Matching ignores case, so `FIX` is a patch; the JavaScript
    /// `detect-next-version` package matches case-sensitively and ignores it.
    pub fn classify(&self, commit_type: &str, is_breaking: bool) -> Option<VersionBump> {
        if is_breaking {
            return Some(VersionBump::Major);
        }

        let commit_type = commit_type.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(&commit_type))
            .map(|rule| rule.bump)
    }

    pub fn classify_commit(&self, commit: &ParsedCommit) -> Option<VersionBump> {
        self.classify(&commit.r#type, commit.is_breaking_change)
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Classifier::new(&ConventionalCommitsConfig::default())
    }
}

/// Classify with the default keyword lists.
///
/// # Example
/// ```
/// use detect_next_version::analyzer::classify;
/// use detect_next_version::domain::VersionBump;
///
/// assert_eq!(classify("fix", false), Some(VersionBump::Patch));
/// assert_eq!(classify("fix", true), Some(VersionBump::Major));
/// assert_eq!(classify("chore", false), None);
/// ```
pub fn classify(commit_type: &str, is_breaking: bool) -> Option<VersionBump> {
    Classifier::default().classify(commit_type, is_breaking)
}
