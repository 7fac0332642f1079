use serde::Serialize;
use tracing::{debug, warn};

use super::classifier::Classifier;
use crate::boundary::BoundaryWarning;
use crate::config::{Config, VersioningConfig};
use crate::domain::{increment, IncrementOptions, ParsedCommit, TagPattern, Version, VersionBump};
use crate::error::Result;
use crate::git::Repository;
use git2::Oid;

/// A commit header together with the bump it calls for
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedCommit {
    pub header: String,
    pub bump: Option<VersionBump>,
}

/// Outcome of classifying a batch of commit messages
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Analysis {
    /// Most significant bump across all commits
    pub increment: Option<VersionBump>,
    /// Conventional commits in input order
    pub commits: Vec<ClassifiedCommit>,
    pub warnings: Vec<BoundaryWarning>,
}

/// The next-version report.
///
/// Serializes as `{"increment", "lastVersion", "nextVersion"}`; `nextVersion`
/// is left out entirely when nothing calls for a release.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NextVersion {
    pub increment: Option<VersionBump>,
    pub last_version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_version: Option<String>,
}

/// Everything learned from a repository
#[derive(Debug, Clone, PartialEq)]
pub struct RepositoryAnalysis {
    /// Tag the current version was read from, if any
    pub latest_tag: Option<String>,
    pub analysis: Analysis,
    pub next: NextVersion,
}

/// Analyzes commits to determine the next version
pub struct VersionAnalyzer {
    classifier: Classifier,
    breaking_change_indicators: Vec<String>,
    versioning: VersioningConfig,
}

impl VersionAnalyzer {
    /// Create a new version analyzer
    pub fn new(config: &Config) -> Self {
        VersionAnalyzer {
            classifier: Classifier::new(&config.conventional_commits),
            breaking_change_indicators: config
                .conventional_commits
                .breaking_change_indicators
                .clone(),
            versioning: config.versioning.clone(),
        }
    }

    /// Classify every message and reduce them to the most significant bump.
    ///
    /// Messages without a conventional header are skipped and reported as a
    /// [`BoundaryWarning::NonConventionalCommits`] warning.
    pub fn analyze_messages(&self, messages: &[String]) -> Analysis {
        let mut commits = Vec::new();
        let mut skipped = 0;

        for message in messages {
            match ParsedCommit::parse_with_indicators(message, &self.breaking_change_indicators) {
                Ok(parsed) => {
                    let bump = self.classifier.classify_commit(&parsed);
                    debug!(header = %parsed.header, bump = ?bump, "classified commit");
                    commits.push(ClassifiedCommit {
                        header: parsed.header,
                        bump,
                    });
                }
                Err(e) => {
                    debug!(error = %e, "skipping commit");
                    skipped += 1;
                }
            }
        }

        let increment = commits.iter().filter_map(|c| c.bump).max();

        let mut warnings = Vec::new();
        if skipped > 0 {
            warnings.push(BoundaryWarning::NonConventionalCommits { count: skipped });
        }
        if increment.is_none() && !commits.is_empty() {
            warnings.push(BoundaryWarning::NoVersionImpact {
                commits: commits.len(),
            });
        }

        Analysis {
            increment,
            commits,
            warnings,
        }
    }

    /// Apply a bump to `current`.
    ///
    /// # Returns
    /// * `Ok(NextVersion)` - With `next_version` set only when `bump` is some
    /// * `Err` - If `current` is not a valid version and a bump was requested
    pub fn report(&self, current: &str, bump: Option<VersionBump>) -> Result<NextVersion> {
        let next_version = match bump {
            Some(bump) => {
                let options = IncrementOptions::default().loose(self.versioning.loose);
                Some(increment(current, bump.into(), &options)?)
            }
            None => None,
        };

        Ok(NextVersion {
            increment: bump,
            last_version: current.to_string(),
            next_version,
        })
    }

    /// Analyze commit messages against a known current version
    ///
    /// # Example
    /// ```
    /// use detect_next_version::analyzer::VersionAnalyzer;
    /// use detect_next_version::config::Config;
    ///
    /// let analyzer = VersionAnalyzer::new(&Config::default());
    /// let messages = vec!["fix: a".to_string(), "feat: b".to_string()];
    /// let next = analyzer.next_version("0.1.0", &messages).unwrap();
    /// assert_eq!(next.next_version.as_deref(), Some("0.2.0"));
    /// ```
    pub fn next_version(&self, current: &str, messages: &[String]) -> Result<NextVersion> {
        let analysis = self.analyze_messages(messages);
        self.report(current, analysis.increment)
    }

    /// Find the greatest version among the tags that follow the tag pattern.
    ///
    /// Tags that look like version tags but fail to parse are reported as
    /// [`BoundaryWarning::UnparsableTag`]. The returned version's
    /// [`Version::raw`] is the version text exactly as written in the tag.
    pub fn latest_version<R: Repository>(
        &self,
        repo: &R,
    ) -> Result<(Option<(String, Version)>, Vec<BoundaryWarning>)> {
        let pattern = TagPattern::new(self.versioning.tag_pattern.as_str())?;
        let mut latest: Option<(String, Version)> = None;
        let mut warnings = Vec::new();

        for tag in repo.list_tags()? {
            match pattern.parse_tag(&tag, self.versioning.loose) {
                None => continue,
                Some(Err(e)) => {
                    warn!(%tag, error = %e, "ignoring unparsable version tag");
                    warnings.push(BoundaryWarning::UnparsableTag {
                        tag,
                        reason: e.to_string(),
                    });
                }
                Some(Ok(version)) => {
                    if latest.as_ref().map_or(true, |(_, best)| version > *best) {
                        latest = Some((tag, version));
                    }
                }
            }
        }

        Ok((latest, warnings))
    }

    /// Work out the next version from repository history.
    ///
    /// The current version comes from the latest version tag (or the
    /// configured initial version when there is none) and only commits made
    /// after that tag are analyzed.
    pub fn analyze_repository<R: Repository>(&self, repo: &R) -> Result<RepositoryAnalysis> {
        let (latest, mut warnings) = self.latest_version(repo)?;
        let head = repo.head_oid()?;

        let (latest_tag, current, from_oid) = match latest {
            Some((tag, version)) => {
                let oid = repo.find_tag_oid(&tag)?.unwrap_or_else(Oid::zero);
                (Some(tag), version.raw().to_string(), oid)
            }
            None => {
                debug!(
                    initial = %self.versioning.initial_version,
                    "no version tag found, starting from the initial version"
                );
                (None, self.versioning.initial_version.clone(), Oid::zero())
            }
        };

        let commits = repo.get_commits_between(from_oid, head)?;
        let messages: Vec<String> = commits.into_iter().map(|c| c.message).collect();

        if let Some(tag) = latest_tag.as_ref().filter(|_| messages.is_empty()) {
            warnings.push(BoundaryWarning::NoNewCommits {
                latest_tag: tag.clone(),
                current_commit_hash: head.to_string(),
            });
        }

        let mut analysis = self.analyze_messages(&messages);
        warnings.append(&mut analysis.warnings);
        analysis.warnings = warnings;

        let next = self.report(&current, analysis.increment)?;

        Ok(RepositoryAnalysis {
            latest_tag,
            analysis,
            next,
        })
    }
}
