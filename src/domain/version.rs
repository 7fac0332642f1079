use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use super::identifier::Identifier;
use crate::error::{DetectError, Result};

/// Largest integer a version component may hold (2^53 - 1).
pub const MAX_SAFE_INTEGER: u64 = 9_007_199_254_740_991;

/// Longest version string accepted by the parser.
pub const MAX_LENGTH: usize = 256;

const NUMERIC_IDENTIFIER: &str = r"0|[1-9][0-9]*";
const NUMERIC_IDENTIFIER_LOOSE: &str = r"[0-9]+";
const NON_NUMERIC_IDENTIFIER: &str = r"[0-9]*[a-zA-Z-][a-zA-Z0-9-]*";
const BUILD_IDENTIFIER: &str = r"[0-9A-Za-z-]+";

/// `v1.2.3-beta.1+build.5`: no leading zeros, mandatory pre-release hyphen.
static FULL: LazyLock<Regex> = LazyLock::new(|| {
    let main = format!(r"({n})\.({n})\.({n})", n = NUMERIC_IDENTIFIER);
    let pre_id = format!(r"(?:{}|{})", NUMERIC_IDENTIFIER, NON_NUMERIC_IDENTIFIER);
    let pre = format!(r"(?:-({id}(?:\.{id})*))", id = pre_id);
    grammar(&format!(r"v?{}{}?{}?", main, pre, build()))
});

/// Also accepts `=1.2.3`, `v 01.02.03` and `1.0.0alpha1`.
static LOOSE: LazyLock<Regex> = LazyLock::new(|| {
    let main = format!(r"({n})\.({n})\.({n})", n = NUMERIC_IDENTIFIER_LOOSE);
    let pre_id = format!(r"(?:{}|{})", NUMERIC_IDENTIFIER_LOOSE, NON_NUMERIC_IDENTIFIER);
    let pre = format!(r"(?:-?({id}(?:\.{id})*))", id = pre_id);
    grammar(&format!(r"[v=\s]*{}{}?{}?", main, pre, build()))
});

fn build() -> String {
    format!(r"(?:\+({id}(?:\.{id})*))", id = BUILD_IDENTIFIER)
}

fn grammar(body: &str) -> Regex {
    // The pattern is assembled from the constants above and is always valid.
    Regex::new(&format!("^{}$", body)).unwrap_or_else(|e| panic!("invalid version grammar: {e}"))
}

/// Semantic version with pre-release and build metadata.
///
/// Equality and ordering follow semver precedence: build metadata and the raw
/// input are ignored. The canonical rendering (see [`fmt::Display`]) is
/// `major.minor.patch[-prerelease]` and is always derived from the fields.
#[derive(Debug, Clone)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub prerelease: Vec<Identifier>,
    pub build: Vec<String>,
    pub(crate) raw: String,
}

impl Version {
    /// Create a release version (no pre-release, no build metadata)
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            prerelease: Vec::new(),
            build: Vec::new(),
            raw: String::new(),
        }
        .normalized()
    }

    /// Replace the pre-release identifiers
    pub fn with_prerelease(mut self, prerelease: Vec<Identifier>) -> Self {
        self.prerelease = prerelease;
        self.normalized()
    }

    /// Parse a version string.
    ///
    /// Surrounding whitespace is ignored. With `loose` set, leading `v`/`=`
    /// runs, leading zeros and a missing pre-release hyphen are tolerated.
    ///
    /// # Returns
    /// * `Ok(Version)` - Parsed version, `raw` holding `input` untouched
    /// * `Err(DetectError::InvalidVersion)` - Grammar mismatch, over-long input,
    ///   or a component above [`MAX_SAFE_INTEGER`]
    ///
    /// # Example
    /// ```
    /// use detect_next_version::domain::Version;
    ///
    /// let v = Version::parse("v1.2.3-beta.1+exp.sha", false).unwrap();
    /// assert_eq!(v.to_string(), "1.2.3-beta.1");
    /// assert_eq!(v.build, vec!["exp", "sha"]);
    /// assert!(Version::parse("01.2.3", false).is_err());
    /// assert_eq!(Version::parse("=01.2.3", true).unwrap().to_string(), "1.2.3");
    /// ```
    pub fn parse(input: &str, loose: bool) -> Result<Self> {
        if input.len() > MAX_LENGTH {
            return Err(DetectError::invalid_version(
                input,
                format!("version is longer than {} characters", MAX_LENGTH),
            ));
        }

        let grammar = if loose { &*LOOSE } else { &*FULL };
        let captures = grammar.captures(input.trim()).ok_or_else(|| {
            DetectError::invalid_version(input, "does not match the version grammar")
        })?;

        let component = |index: usize, name: &str| -> Result<u64> {
            let digits = captures.get(index).map(|m| m.as_str()).unwrap_or_default();
            match digits.parse::<u64>() {
                Ok(n) if n <= MAX_SAFE_INTEGER => Ok(n),
                _ => Err(DetectError::invalid_version(
                    input,
                    format!("invalid {} version", name),
                )),
            }
        };

        let major = component(1, "major")?;
        let minor = component(2, "minor")?;
        let patch = component(3, "patch")?;

        let prerelease = captures
            .get(4)
            .map(|m| m.as_str().split('.').map(Identifier::parse).collect())
            .unwrap_or_default();

        let build = captures
            .get(5)
            .map(|m| m.as_str().split('.').map(str::to_string).collect())
            .unwrap_or_default();

        Ok(Version {
            major,
            minor,
            patch,
            prerelease,
            build,
            raw: input.to_string(),
        })
    }

    /// The string this version was parsed from.
    ///
    /// For versions produced by an increment this is the canonical rendering.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Whether any pre-release identifiers are present
    pub fn is_prerelease(&self) -> bool {
        !self.prerelease.is_empty()
    }

    /// Reset `raw` to the canonical rendering after a structural change
    pub(crate) fn normalized(mut self) -> Self {
        self.raw = self.to_string();
        self
    }
}

impl FromStr for Version {
    type Err = DetectError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s, false)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        for (i, id) in self.prerelease.iter().enumerate() {
            let sep = if i == 0 { '-' } else { '.' };
            write!(f, "{}{}", sep, id)?;
        }
        Ok(())
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
            .then_with(|| match (self.is_prerelease(), other.is_prerelease()) {
                (false, false) => Ordering::Equal,
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                (true, true) => self.prerelease.cmp(&other.prerelease),
            })
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
