//! Semantic version increments driven by conventional commits.
//!
//! [`domain`] holds the version grammar and the increment engine,
//! [`analyzer`] classifies commits and works out the next version from a
//! list of messages or from a [`git::Repository`].

pub mod analyzer;
pub mod boundary;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod ui;

pub use analyzer::{classify, detect};
pub use domain::{inc, increment};
pub use error::{DetectError, Result};
