use std::fmt;

/// Warnings that occur while working out the next version.
/// These are non-fatal issues that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// No new commits since the latest tag
    NoNewCommits {
        latest_tag: String,
        current_commit_hash: String,
    },
    /// Tag looks like a version tag but cannot be parsed as a semantic version
    UnparsableTag { tag: String, reason: String },
    /// Commit messages without a conventional header were skipped
    NonConventionalCommits { count: usize },
    /// None of the commits calls for a version bump
    NoVersionImpact { commits: usize },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NoNewCommits {
                latest_tag,
                current_commit_hash,
            } => {
                let short_hash = if current_commit_hash.len() > 7 {
                    &current_commit_hash[..7]
                } else {
                    current_commit_hash.as_str()
                };
                write!(
                    f,
                    "No new commits since tag '{}' (current: {})",
                    latest_tag, short_hash
                )
            }
            BoundaryWarning::UnparsableTag { tag, reason } => {
                write!(f, "Cannot parse tag '{}': {}", tag, reason)
            }
            BoundaryWarning::NonConventionalCommits { count } => {
                let noun = if *count == 1 { "commit" } else { "commits" };
                write!(
                    f,
                    "Skipped {} non-conventional {} while analyzing",
                    count, noun
                )
            }
            BoundaryWarning::NoVersionImpact { commits } => {
                write!(
                    f,
                    "None of the {} analyzed commits requires a version bump",
                    commits
                )
            }
        }
    }
}
