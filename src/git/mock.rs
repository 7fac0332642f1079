use crate::error::{DetectError, Result};
use crate::git::{CommitInfo, Repository};
use git2::Oid;
use std::collections::HashMap;

/// Mock repository for testing without actual git operations
///
/// History is linear: commits are kept in the order they were added and the
/// last one added is HEAD.
pub struct MockRepository {
    commits: Vec<(Oid, CommitInfo)>,
    tags: HashMap<String, Oid>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            commits: Vec::new(),
            tags: HashMap::new(),
        }
    }

    /// Append a commit with the given message and return its OID
    pub fn commit(&mut self, message: impl Into<String>) -> Oid {
        let n = self.commits.len() + 1;
        let mut bytes = [0u8; 20];
        bytes[12..].copy_from_slice(&(n as u64).to_be_bytes());
        // 20 bytes is always a valid OID length
        let oid = Oid::from_bytes(&bytes).unwrap_or_else(|_| Oid::zero());

        self.commits.push((
            oid,
            CommitInfo {
                message: message.into(),
            },
        ));
        oid
    }

    /// Add a tag pointing to an OID
    pub fn add_tag(&mut self, name: impl Into<String>, oid: Oid) {
        self.tags.insert(name.into(), oid);
    }

    /// Tag the current HEAD
    pub fn tag_head(&mut self, name: impl Into<String>) {
        if let Some((oid, _)) = self.commits.last() {
            let oid = *oid;
            self.add_tag(name, oid);
        }
    }

    fn position(&self, oid: Oid) -> Option<usize> {
        self.commits.iter().position(|(id, _)| *id == oid)
    }
}

fn not_found(what: &str) -> DetectError {
    git2::Error::from_str(&format!("{} not found", what)).into()
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn head_oid(&self) -> Result<Oid> {
        self.commits
            .last()
            .map(|(oid, _)| *oid)
            .ok_or_else(|| not_found("reference 'HEAD'"))
    }

    fn get_commits_between(&self, from_oid: Oid, to_oid: Oid) -> Result<Vec<CommitInfo>> {
        let end = self
            .position(to_oid)
            .ok_or_else(|| not_found(&format!("commit {}", to_oid)))?;
        let start = if from_oid.is_zero() {
            0
        } else {
            self.position(from_oid)
                .map(|i| i + 1)
                .ok_or_else(|| not_found(&format!("commit {}", from_oid)))?
        };

        Ok(self
            .commits
            .iter()
            .skip(start)
            .take((end + 1).saturating_sub(start))
            .map(|(_, info)| info.clone())
            .collect())
    }

    fn find_tag_oid(&self, tag_name: &str) -> Result<Option<Oid>> {
        Ok(self.tags.get(tag_name).copied())
    }

    fn list_tags(&self) -> Result<Vec<String>> {
        let mut tags: Vec<String> = self.tags.keys().cloned().collect();
        tags.sort();
        Ok(tags)
    }
}
