//! Pure formatting functions for UI output.
//!
//! `format_*` functions build strings and are unit tested; `display_*`
//! functions only print what they format.

use console::style;

use crate::analyzer::{ClassifiedCommit, NextVersion};
use crate::boundary::BoundaryWarning;

const MAX_LISTED_COMMITS: usize = 10;
const MAX_HEADER_WIDTH: usize = 60;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// One line of the commit listing: the header cut to a fixed width and the
/// bump it calls for.
pub fn format_commit_line(index: usize, commit: &ClassifiedCommit) -> String {
    let header = if commit.header.chars().count() > MAX_HEADER_WIDTH {
        let cut: String = commit.header.chars().take(MAX_HEADER_WIDTH).collect();
        format!("{}...", cut)
    } else {
        commit.header.clone()
    };

    let bump = commit.bump.map_or("none", |b| b.as_str());
    format!("  {}. {} [{}]", index, header, bump)
}

/// Display the classified commits since `latest_tag`.
///
/// Shows up to 10 commits; the rest are summarized by count.
pub fn display_commit_analysis(commits: &[ClassifiedCommit], latest_tag: Option<&str>) {
    let since = latest_tag.map_or_else(|| "the first commit".to_string(), |t| format!("'{}'", t));
    println!("\n{}", style(format!("Analyzing commits since {}", since)).bold());
    println!("{}", style(format!("{} conventional commits:", commits.len())).underlined());

    for (i, commit) in commits.iter().take(MAX_LISTED_COMMITS).enumerate() {
        println!("{}", format_commit_line(i + 1, commit));
    }

    if commits.len() > MAX_LISTED_COMMITS {
        println!("  ... and {} more commits", commits.len() - MAX_LISTED_COMMITS);
    }
}

/// Summary line of a next-version report
pub fn format_next_version(next: &NextVersion) -> String {
    match (&next.increment, &next.next_version) {
        (Some(bump), Some(version)) => {
            format!("{} -> {} ({} release)", next.last_version, version, bump)
        }
        _ => format!("{} (no release needed)", next.last_version),
    }
}

/// Display the proposed version change.
pub fn display_next_version(next: &NextVersion) {
    match &next.next_version {
        Some(version) => {
            println!("\n{}", style("Next Version:").bold());
            println!("  From: {}", style(&next.last_version).red());
            println!("  To:   {}", style(version).green());
        }
        None => display_status(&format_next_version(next)),
    }
}
