// tests/increment_test.rs
use detect_next_version::domain::{
    inc, increment, BumpCategory, IncrementOptions, Version, VersionBump,
};
use detect_next_version::{classify, DetectError};
use proptest::prelude::*;

fn next(version: &str, release: &str) -> String {
    let category: BumpCategory = release.parse().unwrap();
    increment(version, category, &IncrementOptions::default()).unwrap()
}

fn next_with(version: &str, release: &str, identifier: &str) -> String {
    let category: BumpCategory = release.parse().unwrap();
    increment(
        version,
        category,
        &IncrementOptions::default().identifier(identifier),
    )
    .unwrap()
}

#[test]
fn test_increment_table() {
    let cases = [
        ("1.2.3", "major", "2.0.0"),
        ("1.2.3", "minor", "1.3.0"),
        ("1.2.3", "patch", "1.2.4"),
        ("1.2.3tag", "major", ""),
        ("1.2.3-tag", "major", "2.0.0"),
        ("1.2.3", "fake", ""),
        ("1.2.0-0", "patch", "1.2.0"),
        ("fake", "major", ""),
        ("1.2.3-4", "major", "2.0.0"),
        ("1.2.3-4", "minor", "1.3.0"),
        ("1.2.3-4", "patch", "1.2.3"),
        ("1.2.3-alpha.0.beta", "major", "2.0.0"),
        ("1.2.3-alpha.0.beta", "minor", "1.3.0"),
        ("1.2.3-alpha.0.beta", "patch", "1.2.3"),
        ("1.2.4", "prerelease", "1.2.5-0"),
        ("1.2.3-0", "prerelease", "1.2.3-1"),
        ("1.2.3-alpha.0", "prerelease", "1.2.3-alpha.1"),
        ("1.2.3-alpha.1", "prerelease", "1.2.3-alpha.2"),
        ("1.2.3-alpha.0.beta", "prerelease", "1.2.3-alpha.1.beta"),
        ("1.2.3-alpha.10.0.beta", "prerelease", "1.2.3-alpha.10.1.beta"),
        ("1.2.3-alpha.9.beta", "prerelease", "1.2.3-alpha.10.beta"),
        ("1.2.3-alpha.10.beta", "prerelease", "1.2.3-alpha.11.beta"),
        ("1.2.0", "prepatch", "1.2.1-0"),
        ("1.2.0-1", "prepatch", "1.2.1-0"),
        ("1.2.0", "preminor", "1.3.0-0"),
        ("1.2.3-1", "preminor", "1.3.0-0"),
        ("1.2.0", "premajor", "2.0.0-0"),
        ("1.2.3-1", "premajor", "2.0.0-0"),
        ("1.2.0-1", "minor", "1.2.0"),
        ("1.0.0-1", "major", "1.0.0"),
        ("1.2.3-1", "pre", "1.2.3-2"),
        ("1.2.3", "pre", "1.2.3-0"),
    ];

    for (version, release, expected) in cases {
        let result = release
            .parse::<BumpCategory>()
            .ok()
            .and_then(|category| inc(version, category, false, None))
            .unwrap_or_default();
        assert_eq!(result, expected, "{} {}", version, release);
    }
}

#[test]
fn test_increment_with_identifier_table() {
    let cases = [
        ("1.2.0", "prepatch", "beta", "1.2.1-beta.0"),
        ("1.2.0-beta.0", "prerelease", "beta", "1.2.0-beta.1"),
        ("1.2.3-alpha.9.beta", "prerelease", "alpha", "1.2.3-alpha.10.beta"),
        ("1.2.3-alpha", "prerelease", "beta", "1.2.3-beta.0"),
        ("1.2.3-beta.foo", "prerelease", "beta", "1.2.3-beta.0"),
        ("1.2.4", "prerelease", "dev", "1.2.5-dev.0"),
        ("1.2.3", "premajor", "dev", "2.0.0-dev.0"),
        ("1.2.3-1", "preminor", "dev", "1.3.0-dev.0"),
        ("1.2.3", "major", "dev", "2.0.0"),
    ];

    for (version, release, identifier, expected) in cases {
        assert_eq!(
            next_with(version, release, identifier),
            expected,
            "{} {} {}",
            version,
            release,
            identifier
        );
    }
}

#[test]
fn test_documented_transitions() {
    assert_eq!(next("1.0.0-5", "major"), "1.0.0");
    assert_eq!(next("1.1.0", "major"), "2.0.0");
    assert_eq!(next("1.2.0-5", "minor"), "1.2.0");
    assert_eq!(next("1.2.1", "minor"), "1.3.0");
    assert_eq!(next("1.2.0-5", "patch"), "1.2.0");
    assert_eq!(next("1.2.0", "patch"), "1.2.1");
}

#[test]
fn test_errors_are_typed() {
    let opts = IncrementOptions::default();
    assert!(matches!(
        increment("not-a-version", BumpCategory::Patch, &opts),
        Err(DetectError::InvalidVersion { .. })
    ));
    assert!(matches!(
        "bogus".parse::<BumpCategory>(),
        Err(DetectError::InvalidIncrement(_))
    ));
    assert!(matches!(
        increment(
            "1.2.3",
            BumpCategory::Prerelease,
            &IncrementOptions::default().identifier("be.ta")
        ),
        Err(DetectError::InvalidPrereleaseId(_))
    ));
}

#[test]
fn test_classify_table() {
    assert_eq!(classify("fix", false), Some(VersionBump::Patch));
    assert_eq!(classify("feat", false), Some(VersionBump::Minor));
    assert_eq!(classify("chore", false), None);
    assert_eq!(classify("fix", true), Some(VersionBump::Major));
    assert_eq!(classify("break", false), Some(VersionBump::Major));
}

// ============================================================================
// Properties
// ============================================================================

fn prerelease_identifier() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z][a-z0-9-]{0,5}",
        (0u64..500).prop_map(|n| n.to_string()),
    ]
}

fn version_string() -> impl Strategy<Value = String> {
    (
        0u64..1000,
        0u64..1000,
        0u64..1000,
        prop::collection::vec(prerelease_identifier(), 0..3),
    )
        .prop_map(|(major, minor, patch, pre)| {
            if pre.is_empty() {
                format!("{}.{}.{}", major, minor, patch)
            } else {
                format!("{}.{}.{}-{}", major, minor, patch, pre.join("."))
            }
        })
}

fn category() -> impl Strategy<Value = BumpCategory> {
    prop_oneof![
        Just(BumpCategory::Major),
        Just(BumpCategory::Minor),
        Just(BumpCategory::Patch),
        Just(BumpCategory::Premajor),
        Just(BumpCategory::Preminor),
        Just(BumpCategory::Prepatch),
        Just(BumpCategory::Prerelease),
    ]
}

proptest! {
    #[test]
    fn prop_render_is_idempotent(input in version_string()) {
        let version = Version::parse(&input, false).unwrap();
        let rendered = version.to_string();
        prop_assert_eq!(&rendered, &input);
        prop_assert_eq!(Version::parse(&rendered, false).unwrap().to_string(), rendered);
    }

    #[test]
    fn prop_increment_is_strictly_greater(input in version_string(), category in category()) {
        let current = Version::parse(&input, false).unwrap();
        let next = current.increment(category, None).unwrap();
        prop_assert!(next > current, "{} {} -> {}", input, category, next);
    }

    #[test]
    fn prop_pre_on_prerelease_is_strictly_greater(input in version_string()) {
        let current = Version::parse(&input, false).unwrap();
        prop_assume!(current.is_prerelease());
        let next = current.increment(BumpCategory::Pre, None).unwrap();
        prop_assert!(next > current);
    }

    #[test]
    fn prop_matches_semver_crate(a in version_string(), b in version_string()) {
        let ours_a = Version::parse(&a, false).unwrap();
        let ours_b = Version::parse(&b, false).unwrap();
        let theirs_a = semver::Version::parse(&a).unwrap();
        let theirs_b = semver::Version::parse(&b).unwrap();

        prop_assert_eq!(ours_a.to_string(), theirs_a.to_string());
        prop_assert_eq!(ours_a.cmp(&ours_b), theirs_a.cmp(&theirs_b));
    }
}
