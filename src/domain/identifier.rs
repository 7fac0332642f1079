//! Pre-release identifiers
//!
//! A pre-release is a dot-separated list of identifiers. Each one is either
//! numeric (compared and incremented arithmetically) or textual (compared
//! lexically and never incremented).
//! According to semver.org: https://semver.org/#spec-item-9

use std::cmp::Ordering;
use std::fmt;

use super::version::MAX_SAFE_INTEGER;

/// A single dot-separated pre-release identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identifier {
    /// All-digit identifier within the safe integer range (e.g. "1" in "beta.1")
    Numeric(u64),
    /// Anything else (e.g. "beta", "rc", "x-1", or an all-digit run too large to count)
    Text(String),
}

impl Identifier {
    /// Interpret a raw identifier.
    ///
    /// An identifier made only of ASCII digits becomes [`Identifier::Numeric`]
    /// when its value is below [`MAX_SAFE_INTEGER`]; everything else is kept
    /// verbatim as [`Identifier::Text`].
    ///
    /// # Example
    /// ```
    /// use detect_next_version::domain::Identifier;
    ///
    /// assert_eq!(Identifier::parse("7"), Identifier::Numeric(7));
    /// assert_eq!(Identifier::parse("rc"), Identifier::Text("rc".to_string()));
    /// ```
    pub fn parse(s: &str) -> Self {
        if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(n) = s.parse::<u64>() {
                if n < MAX_SAFE_INTEGER {
                    return Identifier::Numeric(n);
                }
            }
        }
        Identifier::Text(s.to_string())
    }

    /// Whether this identifier takes part in arithmetic increments
    pub fn is_numeric(&self) -> bool {
        matches!(self, Identifier::Numeric(_))
    }

    /// Compare against a textual tag name.
    ///
    /// Only text identifiers can equal a tag; `Numeric(1)` never equals `"1"`.
    pub fn is_text(&self, tag: &str) -> bool {
        matches!(self, Identifier::Text(s) if s == tag)
    }
}

impl From<u64> for Identifier {
    fn from(n: u64) -> Self {
        Identifier::Numeric(n)
    }
}

impl From<&str> for Identifier {
    fn from(s: &str) -> Self {
        Identifier::Text(s.to_string())
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Numeric(n) => write!(f, "{}", n),
            Identifier::Text(s) => write!(f, "{}", s),
        }
    }
}

// Numeric identifiers have lower precedence than textual ones.
impl Ord for Identifier {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Identifier::Numeric(a), Identifier::Numeric(b)) => a.cmp(b),
            (Identifier::Numeric(_), Identifier::Text(_)) => Ordering::Less,
            (Identifier::Text(_), Identifier::Numeric(_)) => Ordering::Greater,
            (Identifier::Text(a), Identifier::Text(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for Identifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
