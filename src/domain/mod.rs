//! Domain logic - pure version and commit rules independent of git operations

pub mod bump;
pub mod commit;
pub mod identifier;
pub mod increment;
pub mod tag;
pub mod version;

pub use bump::{BumpCategory, VersionBump};
pub use commit::{ParsedCommit, BREAKING_CHANGE_MARKER};
pub use identifier::Identifier;
pub use increment::{inc, increment, IncrementOptions};
pub use tag::TagPattern;
pub use version::{Version, MAX_LENGTH, MAX_SAFE_INTEGER};
