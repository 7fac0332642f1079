//! Read-only access to release history
//!
//! Version detection only needs to know where HEAD is, which tags exist and
//! which commits were made after a tag. [`Repository`] captures exactly that,
//! so the analyzer runs the same way against a real repository
//! ([`Git2Repository`]) and an in-memory history ([`MockRepository`]).
//!
//! ```rust
//! # use detect_next_version::git::{MockRepository, Repository};
//! # use git2::Oid;
//! let mut repo = MockRepository::new();
//! repo.commit("feat: first");
//! repo.tag_head("v0.1.0");
//! let head = repo.commit("fix: second");
//!
//! let since = repo.find_tag_oid("v0.1.0").unwrap().unwrap_or_else(Oid::zero);
//! let commits = repo.get_commits_between(since, head).unwrap();
//! assert_eq!(commits.len(), 1);
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;
use git2::Oid;

/// A commit as seen by the analyzer
#[derive(Debug, Clone, PartialEq)]
pub struct CommitInfo {
    /// Raw message, header first
    pub message: String,
}

/// The git queries version detection runs.
///
/// Failures surface as [`crate::error::DetectError`], with `git2` errors
/// converted through `From`.
pub trait Repository {
    /// Commit HEAD resolves to; an unborn HEAD is an error
    fn head_oid(&self) -> Result<Oid>;

    /// Commits reachable from `to_oid` but not from `from_oid`, oldest first.
    ///
    /// `to_oid` itself is included and `from_oid` is not. [`Oid::zero`] as
    /// `from_oid` walks the whole history.
    fn get_commits_between(&self, from_oid: Oid, to_oid: Oid) -> Result<Vec<CommitInfo>>;

    /// Commit a tag points at, peeling annotated tags.
    ///
    /// `Ok(None)` when no tag has that name.
    fn find_tag_oid(&self, tag_name: &str) -> Result<Option<Oid>>;

    /// Names of every tag, in no particular order
    fn list_tags(&self) -> Result<Vec<String>>;
}
