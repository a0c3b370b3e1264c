//! The comparable version value shared by every resolver

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::version::error::VersionError;
use crate::version::parser::parse_version;

/// A dotted numeric version with an optional pre-release style suffix.
///
/// Ordering pads the shorter segment list with zeros, so `1.2 == 1.2.0` and
/// `1.2 < 1.2.1`. When segments tie, a version without a suffix is greater than
/// the same segments with one (`1.2.3-SNAPSHOT < 1.2.3`).
#[derive(Debug, Clone)]
pub struct Version {
    segments: Vec<u64>,
    suffix: Option<String>,
    text: String,
}

impl Version {
    pub(crate) fn from_parts(segments: Vec<u64>, suffix: Option<String>, text: String) -> Self {
        Self {
            segments,
            suffix,
            text,
        }
    }

    /// Parse a loosely formatted version string
    pub fn parse(text: &str) -> Result<Self, VersionError> {
        parse_version(text)
    }

    pub fn segments(&self) -> &[u64] {
        &self.segments
    }

    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }

    /// The trimmed text this version was parsed from
    pub fn as_str(&self) -> &str {
        &self.text
    }

    fn compare_segments(&self, other: &Self) -> Ordering {
        let len = self.segments.len().max(other.segments.len());
        (0..len)
            .map(|i| {
                let left = self.segments.get(i).copied().unwrap_or(0);
                let right = other.segments.get(i).copied().unwrap_or(0);
                left.cmp(&right)
            })
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_segments(other)
            .then_with(|| match (&self.suffix, &other.suffix) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(left), Some(right)) => left.cmp(right),
            })
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_version(s)
    }
}

/// Pick the greatest version, failing on an empty input instead of defaulting
pub fn max_of<I>(versions: I) -> Result<Version, VersionError>
where
    I: IntoIterator<Item = Version>,
{
    versions.into_iter().max().ok_or(VersionError::NoCandidates)
}
