//! Parsing of loosely formatted version strings

use std::sync::LazyLock;

use regex::Regex;

use crate::version::error::VersionError;
use crate::version::types::Version;

/// Leading `digits(.digits)*` run followed by an arbitrary remainder
static VERSION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+(?:\.\d+)*)(.*)$").expect("valid version pattern"));

/// Separators dropped from the front of a suffix
const SUFFIX_SEPARATORS: &[char] = &['-', '.', '_', '+'];

/// Parse a version string into a [`Version`].
///
/// The leading numeric run becomes the segments, whatever follows it becomes the
/// suffix. Any number of segments is accepted.
///
/// Examples:
/// - "223.8836.41" -> segments [223, 8836, 41], no suffix
/// - "1.2.3-SNAPSHOT" -> segments [1, 2, 3], suffix "SNAPSHOT"
/// - " 2023.1 " -> segments [2023, 1]
pub fn parse_version(text: &str) -> Result<Version, VersionError> {
    let trimmed = text.trim();
    let malformed = || VersionError::Malformed(text.to_string());

    let captures = VERSION_PATTERN.captures(trimmed).ok_or_else(malformed)?;

    let segments = captures[1]
        .split('.')
        .map(|segment| segment.parse::<u64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| malformed())?;

    let rest = &captures[2];
    let suffix = rest
        .strip_prefix(SUFFIX_SEPARATORS)
        .unwrap_or(rest)
        .to_string();
    let suffix = (!suffix.is_empty()).then_some(suffix);

    Ok(Version::from_parts(segments, suffix, trimmed.to_string()))
}
