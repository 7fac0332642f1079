use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DetectError, Result};

/// Version bump decided by commit analysis, ordered by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionBump {
    Patch,
    Minor,
    Major,
}

impl VersionBump {
    pub fn as_str(&self) -> &'static str {
        match self {
            VersionBump::Patch => "patch",
            VersionBump::Minor => "minor",
            VersionBump::Major => "major",
        }
    }
}

impl fmt::Display for VersionBump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every kind of increment the engine understands.
///
/// `Pre` bumps only the pre-release part and is what the `pre*` categories
/// delegate to; on a release version it moves backwards (`1.0.0` becomes
/// `1.0.0-0`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BumpCategory {
    Major,
    Minor,
    Patch,
    Premajor,
    Preminor,
    Prepatch,
    Prerelease,
    Pre,
}

impl BumpCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            BumpCategory::Major => "major",
            BumpCategory::Minor => "minor",
            BumpCategory::Patch => "patch",
            BumpCategory::Premajor => "premajor",
            BumpCategory::Preminor => "preminor",
            BumpCategory::Prepatch => "prepatch",
            BumpCategory::Prerelease => "prerelease",
            BumpCategory::Pre => "pre",
        }
    }
}

impl From<VersionBump> for BumpCategory {
    fn from(bump: VersionBump) -> Self {
        match bump {
            VersionBump::Major => BumpCategory::Major,
            VersionBump::Minor => BumpCategory::Minor,
            VersionBump::Patch => BumpCategory::Patch,
        }
    }
}

impl FromStr for BumpCategory {
    type Err = DetectError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "major" => Ok(BumpCategory::Major),
            "minor" => Ok(BumpCategory::Minor),
            "patch" => Ok(BumpCategory::Patch),
            "premajor" => Ok(BumpCategory::Premajor),
            "preminor" => Ok(BumpCategory::Preminor),
            "prepatch" => Ok(BumpCategory::Prepatch),
            "prerelease" => Ok(BumpCategory::Prerelease),
            "pre" => Ok(BumpCategory::Pre),
            other => Err(DetectError::InvalidIncrement(other.to_string())),
        }
    }
}

impl fmt::Display for BumpCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
