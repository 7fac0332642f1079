//! User interface module - terminal reporting.
//!
//! - `formatter` - Pure formatting functions
//! - This module - Composite reports printed by the CLI

pub mod formatter;

pub use formatter::{
    display_boundary_warning, display_commit_analysis, display_error, display_next_version,
    display_status, format_commit_line, format_next_version,
};

use crate::analyzer::RepositoryAnalysis;

/// Print the full human readable report for a repository analysis.
///
/// Warnings go to stderr so stdout stays usable in scripts.
pub fn display_report(report: &RepositoryAnalysis) {
    for warning in &report.analysis.warnings {
        display_boundary_warning(warning);
    }

    if !report.analysis.commits.is_empty() {
        display_commit_analysis(&report.analysis.commits, report.latest_tag.as_deref());
    }

    display_next_version(&report.next);
}
