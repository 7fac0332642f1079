//! Analysis engine for determining version bumps from commits

pub mod classifier;
pub mod version_analyzer;

pub use classifier::{classify, Classifier};
pub use version_analyzer::{
    Analysis, ClassifiedCommit, NextVersion, RepositoryAnalysis, VersionAnalyzer,
};

use crate::domain::{ParsedCommit, VersionBump};
use crate::error::Result;

/// Detect the increment a single raw commit message calls for.
///
/// # Example
/// ```
/// use detect_next_version::analyzer::detect;
/// use detect_next_version::domain::VersionBump;
///
/// let increment = detect("fix(ng-list): updates the list order").unwrap();
/// assert_eq!(increment, Some(VersionBump::Patch));
/// ```
pub fn detect(message: &str) -> Result<Option<VersionBump>> {
    let commit = ParsedCommit::parse(message)?;
    Ok(Classifier::default().classify_commit(&commit))
}
