//! Version increment transitions
//!
//! Every transition is a pure function from one [`Version`] to the next.
//! The composite categories (`premajor`, `prerelease`, ...) are built by
//! chaining the simple ones rather than by mutating shared state.

use tracing::debug;

use super::bump::BumpCategory;
use super::identifier::Identifier;
use super::version::{Version, MAX_SAFE_INTEGER};
use crate::error::{DetectError, Result};

/// Knobs for a string-level increment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IncrementOptions {
    /// Parse the input with the loose grammar
    pub loose: bool,
    /// Pre-release tag name for the `pre*` categories (e.g. "beta")
    pub identifier: Option<String>,
}

impl IncrementOptions {
    pub fn loose(mut self, loose: bool) -> Self {
        self.loose = loose;
        self
    }

    pub fn identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }
}

impl Version {
    /// Compute the successor of this version under `category`.
    ///
    /// `identifier` names the pre-release channel for the `pre*` categories
    /// and is ignored by `major`, `minor` and `patch`. An empty identifier is
    /// the same as none.
    ///
    /// Build metadata is carried over unchanged; `raw` of the result is its
    /// canonical rendering.
    ///
    /// # Example
    /// ```
    /// use detect_next_version::domain::{BumpCategory, Version};
    ///
    /// let v: Version = "1.2.0".parse().unwrap();
    /// let next = v.increment(BumpCategory::Prepatch, Some("beta")).unwrap();
    /// assert_eq!(next.to_string(), "1.2.1-beta.0");
    /// ```
    pub fn increment(&self, category: BumpCategory, identifier: Option<&str>) -> Result<Version> {
        let identifier = identifier.filter(|id| !id.is_empty());
        if let Some(id) = identifier {
            validate_identifier(id)?;
        }

        let next = match category {
            BumpCategory::Major => bump_major(self)?,
            BumpCategory::Minor => bump_minor(self)?,
            BumpCategory::Patch => bump_patch(self)?,
            BumpCategory::Premajor => bump_pre(&bump_major(&release_core(self))?, identifier)?,
            BumpCategory::Preminor => bump_pre(&bump_minor(&release_core(self))?, identifier)?,
            BumpCategory::Prepatch => bump_pre(&bump_patch(&release_core(self))?, identifier)?,
            BumpCategory::Prerelease if self.is_prerelease() => bump_pre(self, identifier)?,
            BumpCategory::Prerelease => bump_pre(&bump_patch(self)?, identifier)?,
            BumpCategory::Pre => bump_pre(self, identifier)?,
        };

        Ok(next.normalized())
    }
}

/// Increment a version string.
///
/// # Returns
/// * `Ok(String)` - Canonical rendering of the next version
/// * `Err(DetectError::InvalidVersion)` - The input does not parse, or the
///   result would exceed the safe integer bound
/// * `Err(DetectError::InvalidPrereleaseId)` - The identifier is not a
///   valid pre-release identifier
///
/// # Example
/// ```
/// use detect_next_version::domain::{increment, BumpCategory, IncrementOptions};
///
/// let opts = IncrementOptions::default();
/// assert_eq!(increment("1.0.0-5", BumpCategory::Major, &opts).unwrap(), "1.0.0");
/// assert_eq!(increment("1.1.0", BumpCategory::Major, &opts).unwrap(), "2.0.0");
/// ```
pub fn increment(
    version: &str,
    category: BumpCategory,
    options: &IncrementOptions,
) -> Result<String> {
    debug!(version, %category, loose = options.loose, "incrementing version");
    let current = Version::parse(version, options.loose)?;
    let next = current.increment(category, options.identifier.as_deref())?;
    Ok(next.to_string())
}

/// Like [`increment`], but any failure is simply "no version".
pub fn inc(
    version: &str,
    category: BumpCategory,
    loose: bool,
    identifier: Option<&str>,
) -> Option<String> {
    let options = IncrementOptions {
        loose,
        identifier: identifier.map(str::to_string),
    };
    match increment(version, category, &options) {
        Ok(next) => Some(next),
        Err(e) => {
            debug!(error = %e, "increment produced no version");
            None
        }
    }
}

fn validate_identifier(id: &str) -> Result<()> {
    if id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        Ok(())
    } else {
        Err(DetectError::InvalidPrereleaseId(id.to_string()))
    }
}

fn checked_next(value: u64, component: &str, version: &Version) -> Result<u64> {
    if value >= MAX_SAFE_INTEGER {
        return Err(DetectError::invalid_version(
            version.raw(),
            format!(
                "{} version cannot be incremented past {}",
                component, MAX_SAFE_INTEGER
            ),
        ));
    }
    Ok(value + 1)
}

/// Same version without its pre-release part
fn release_core(version: &Version) -> Version {
    version.clone().with_prerelease(Vec::new())
}

// 1.0.0-5 -> 1.0.0, 1.1.0 -> 2.0.0
fn bump_major(version: &Version) -> Result<Version> {
    let graduates = version.minor == 0 && version.patch == 0 && version.is_prerelease();
    let major = if graduates {
        version.major
    } else {
        checked_next(version.major, "major", version)?
    };
    Ok(Version {
        major,
        minor: 0,
        patch: 0,
        ..version.clone()
    }
    .with_prerelease(Vec::new()))
}

// 1.2.0-5 -> 1.2.0, 1.2.1 -> 1.3.0
fn bump_minor(version: &Version) -> Result<Version> {
    let graduates = version.patch == 0 && version.is_prerelease();
    let minor = if graduates {
        version.minor
    } else {
        checked_next(version.minor, "minor", version)?
    };
    Ok(Version {
        minor,
        patch: 0,
        ..version.clone()
    }
    .with_prerelease(Vec::new()))
}

// 1.2.0-5 -> 1.2.0, 1.2.0 -> 1.2.1
fn bump_patch(version: &Version) -> Result<Version> {
    let patch = if version.is_prerelease() {
        version.patch
    } else {
        checked_next(version.patch, "patch", version)?
    };
    Ok(Version {
        patch,
        ..version.clone()
    }
    .with_prerelease(Vec::new()))
}

// 1.2.0-beta.1 -> 1.2.0-beta.2; with "beta", 1.2.0-beta.x and 1.2.0-beta -> 1.2.0-beta.0
//
// An all-digit identifier too large to count is text, so it is neither
// incremented nor treated as the channel counter.
fn bump_pre(version: &Version, identifier: Option<&str>) -> Result<Version> {
    let mut prerelease = version.prerelease.clone();

    match prerelease.iter().rposition(Identifier::is_numeric) {
        Some(pos) => {
            if let Identifier::Numeric(n) = prerelease[pos] {
                // Numeric identifiers stay strictly below the safe bound
                if n + 1 >= MAX_SAFE_INTEGER {
                    return Err(DetectError::invalid_version(
                        version.raw(),
                        format!(
                            "pre-release number cannot be incremented to {}",
                            MAX_SAFE_INTEGER
                        ),
                    ));
                }
                prerelease[pos] = Identifier::Numeric(n + 1);
            }
        }
        None => prerelease.push(Identifier::Numeric(0)),
    }

    if let Some(id) = identifier {
        let same_channel = prerelease.first().is_some_and(|first| first.is_text(id));
        let counted = prerelease.get(1).is_some_and(Identifier::is_numeric);
        if !(same_channel && counted) {
            prerelease = vec![Identifier::from(id), Identifier::Numeric(0)];
        }
    }

    Ok(version.clone().with_prerelease(prerelease))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inc_str(version: &str, category: BumpCategory) -> String {
        increment(version, category, &IncrementOptions::default()).unwrap()
    }

    fn inc_id(version: &str, category: BumpCategory, id: &str) -> String {
        increment(version, category, &IncrementOptions::default().identifier(id)).unwrap()
    }

    #[test]
    fn test_major() {
        assert_eq!(inc_str("1.0.0-5", BumpCategory::Major), "1.0.0");
        assert_eq!(inc_str("1.1.0", BumpCategory::Major), "2.0.0");
        assert_eq!(inc_str("1.2.3", BumpCategory::Major), "2.0.0");
        assert_eq!(inc_str("1.0.0", BumpCategory::Major), "2.0.0");
        assert_eq!(inc_str("1.0.1-5", BumpCategory::Major), "2.0.0");
        assert_eq!(inc_str("1.1.0-5", BumpCategory::Major), "2.0.0");
    }

    #[test]
    fn test_minor() {
        assert_eq!(inc_str("1.2.0-5", BumpCategory::Minor), "1.2.0");
        assert_eq!(inc_str("1.2.1", BumpCategory::Minor), "1.3.0");
        assert_eq!(inc_str("1.2.0", BumpCategory::Minor), "1.3.0");
        assert_eq!(inc_str("1.2.1-5", BumpCategory::Minor), "1.3.0");
    }

    #[test]
    fn test_patch() {
        assert_eq!(inc_str("1.2.0-5", BumpCategory::Patch), "1.2.0");
        assert_eq!(inc_str("1.2.0", BumpCategory::Patch), "1.2.1");
        assert_eq!(inc_str("1.2.3-beta.4", BumpCategory::Patch), "1.2.3");
    }

    #[test]
    fn test_premajor_preminor_prepatch() {
        assert_eq!(inc_str("1.2.3", BumpCategory::Premajor), "2.0.0-0");
        assert_eq!(inc_str("1.2.3", BumpCategory::Preminor), "1.3.0-0");
        assert_eq!(inc_str("1.2.3", BumpCategory::Prepatch), "1.2.4-0");
        assert_eq!(inc_id("1.2.0", BumpCategory::Prepatch, "beta"), "1.2.1-beta.0");
        assert_eq!(inc_id("1.2.3", BumpCategory::Premajor, "alpha"), "2.0.0-alpha.0");
    }

    #[test]
    fn test_pre_categories_never_graduate() {
        // Unlike the plain categories, the pre-release is dropped before bumping
        assert_eq!(inc_str("1.0.0-5", BumpCategory::Premajor), "2.0.0-0");
        assert_eq!(inc_str("1.2.0-5", BumpCategory::Preminor), "1.3.0-0");
        assert_eq!(inc_str("1.2.0-5", BumpCategory::Prepatch), "1.2.1-0");
        assert_eq!(inc_id("1.2.3-beta.2", BumpCategory::Prepatch, "beta"), "1.2.4-beta.0");
    }

    #[test]
    fn test_prerelease() {
        assert_eq!(inc_str("1.2.0-beta.0", BumpCategory::Prerelease), "1.2.0-beta.1");
        assert_eq!(inc_str("1.2.3", BumpCategory::Prerelease), "1.2.4-0");
        assert_eq!(inc_str("1.2.3-0", BumpCategory::Prerelease), "1.2.3-1");
        assert_eq!(inc_id("1.2.3", BumpCategory::Prerelease, "rc"), "1.2.4-rc.0");
    }

    #[test]
    fn test_pre_increments_last_numeric_only() {
        assert_eq!(inc_str("1.2.3-alpha.1.beta", BumpCategory::Pre), "1.2.3-alpha.2.beta");
        assert_eq!(inc_str("1.2.3-1.2.x", BumpCategory::Pre), "1.2.3-1.3.x");
        assert_eq!(inc_str("1.2.3-alpha", BumpCategory::Pre), "1.2.3-alpha.0");
        assert_eq!(inc_str("1.2.3", BumpCategory::Pre), "1.2.3-0");
    }

    #[test]
    fn test_pre_with_identifier() {
        assert_eq!(inc_id("1.2.0-beta.1", BumpCategory::Prerelease, "beta"), "1.2.0-beta.2");
        assert_eq!(inc_id("1.2.0-beta", BumpCategory::Prerelease, "beta"), "1.2.0-beta.0");
        assert_eq!(inc_id("1.2.0-beta.foo", BumpCategory::Prerelease, "beta"), "1.2.0-beta.0");
        assert_eq!(inc_id("1.2.0-alpha.3", BumpCategory::Prerelease, "beta"), "1.2.0-beta.0");
        assert_eq!(inc_id("1.2.0-1", BumpCategory::Prerelease, "1"), "1.2.0-1.0");
    }

    #[test]
    fn test_empty_identifier_is_none() {
        assert_eq!(inc_id("1.2.0-beta.0", BumpCategory::Prerelease, ""), "1.2.0-beta.1");
    }

    #[test]
    fn test_invalid_identifier() {
        let opts = IncrementOptions::default().identifier("be ta");
        let err = increment("1.2.0", BumpCategory::Prepatch, &opts).unwrap_err();
        assert!(matches!(err, DetectError::InvalidPrereleaseId(_)));
    }

    #[test]
    fn test_build_metadata_is_dropped_from_rendering() {
        assert_eq!(inc_str("1.2.3+build.7", BumpCategory::Patch), "1.2.4");

        let v = Version::parse("1.2.3+build.7", false).unwrap();
        let next = v.increment(BumpCategory::Minor, None).unwrap();
        assert_eq!(next.build, vec!["build", "7"]);
        assert_eq!(next.raw(), "1.3.0");
    }

    #[test]
    fn test_loose_input() {
        let opts = IncrementOptions::default().loose(true);
        assert_eq!(increment("=v01.2.3", BumpCategory::Minor, &opts).unwrap(), "1.3.0");
        let strict = IncrementOptions::default();
        assert!(increment("=v01.2.3", BumpCategory::Minor, &strict).is_err());
    }

    #[test]
    fn test_invalid_version() {
        let err = increment("not-a-version", BumpCategory::Patch, &IncrementOptions::default())
            .unwrap_err();
        assert!(matches!(
            err,
            DetectError::InvalidVersion { ref raw, .. } if raw == "not-a-version"
        ));
        assert_eq!(inc("not-a-version", BumpCategory::Patch, false, None), None);
    }

    #[test]
    fn test_inc_success() {
        assert_eq!(
            inc("1.2.0", BumpCategory::Prepatch, false, Some("beta")),
            Some("1.2.1-beta.0".to_string())
        );
    }

    #[test]
    fn test_overflow_is_rejected() {
        let at_max = format!("{}.0.0", MAX_SAFE_INTEGER);
        let err =
            increment(&at_max, BumpCategory::Major, &IncrementOptions::default()).unwrap_err();
        assert!(err.to_string().contains("cannot be incremented"));

        // Graduating does not need to add anything
        let pre_at_max = format!("{}.0.0-rc", MAX_SAFE_INTEGER);
        assert_eq!(inc_str(&pre_at_max, BumpCategory::Major), at_max);
    }

    #[test]
    fn test_prerelease_number_overflow_is_rejected() {
        let last_countable = format!("1.2.3-beta.{}", MAX_SAFE_INTEGER - 1);
        let err = increment(
            &last_countable,
            BumpCategory::Prerelease,
            &IncrementOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, DetectError::InvalidVersion { .. }));
        assert_eq!(inc(&last_countable, BumpCategory::Pre, false, None), None);

        let below = format!("1.2.3-beta.{}", MAX_SAFE_INTEGER - 2);
        assert_eq!(
            inc_str(&below, BumpCategory::Prerelease),
            format!("1.2.3-beta.{}", MAX_SAFE_INTEGER - 1)
        );
    }

    #[test]
    fn test_uncountable_digits_are_text() {
        let huge = "1.2.3-beta.99999999999999999999";
        assert_eq!(
            inc_str(huge, BumpCategory::Prerelease),
            "1.2.3-beta.99999999999999999999.0"
        );
        // The oversized run does not count as the channel number
        assert_eq!(inc_id(huge, BumpCategory::Prerelease, "beta"), "1.2.3-beta.0");
    }

    #[test]
    fn test_original_version_untouched() {
        let v = Version::parse("1.2.3-beta.1", false).unwrap();
        let _ = v.increment(BumpCategory::Major, None).unwrap();
        assert_eq!(v.to_string(), "1.2.3-beta.1");
    }
}
