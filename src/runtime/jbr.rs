//! JetBrains Runtime artifact name builder
//!
//! Reconstructs the packed archive name (without `.tar.gz`) of a JBR build from
//! a version token such as `17.0.4b469.44`, `11_0_11b1341.1` or `u202b1483.24`,
//! an optional variant (`sdk`, `jcef`, `fd`, ...) and an optional architecture.
//! The naming scheme changed several times; each rule below pins one era.

use std::sync::LazyLock;

use crate::runtime::host::{HostInfo, OperatingSystem, detect_arch};
use crate::version::types::Version;

/// Builds below this number on Java 8 use the old `jbrex` layout
static LEGACY_FORMAT_THRESHOLD: LazyLock<Version> =
    LazyLock::new(|| Version::parse("1483.24").expect("valid threshold"));

/// Builds below this number were published without JCEF
static JCEF_THRESHOLD: LazyLock<Version> =
    LazyLock::new(|| Version::parse("1319.6").expect("valid threshold"));

static ZERO: LazyLock<Version> = LazyLock::new(|| Version::parse("0").expect("valid version"));

const LEGACY_PREFIX: &str = "jbrex";
const JCEF_PREFIX: &str = "jbr_jcef-";
const JBRX_PREFIX: &str = "jbrx-";
const PLAIN_PREFIX: &str = "jbr-";

/// Prefixes recognized at the start of a version token, in match order.
/// `jbr-` must come after the longer `jbr_*` and `jbrsdk-` entries.
const KNOWN_PREFIXES: &[(&str, &str)] = &[
    ("jbrsdk-", "jbrsdk-"),
    ("jbr_jcef-", "jbr_jcef-"),
    ("jbr_dcevm-", "jbr_dcevm-"),
    ("jbr_fd-", "jbr_fd-"),
    ("jbr_nomod-", "jbr_nomod-"),
    ("jbr-", "jbr-"),
    ("jbrx-", "jbrx-"),
    ("jbrex8", LEGACY_PREFIX),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Generation {
    Java8,
    Java17,
    Other,
}

impl Generation {
    pub fn of(major: &str) -> Self {
        if major.starts_with('8') {
            Generation::Java8
        } else if major.starts_with("17") {
            Generation::Java17
        } else {
            Generation::Other
        }
    }
}

/// Inputs of the modern prefix rules
struct PrefixContext<'a> {
    generation: Generation,
    host: &'a HostInfo,
    arch: &'a str,
    build_number: &'a Version,
}

fn is_java17(context: &PrefixContext) -> bool {
    context.generation == Generation::Java17
}

fn is_java8(context: &PrefixContext) -> bool {
    context.generation == Generation::Java8
}

fn is_apple_silicon(context: &PrefixContext) -> bool {
    context.host.os == OperatingSystem::MacOs && context.arch == "aarch64"
}

fn predates_jcef(context: &PrefixContext) -> bool {
    *context.build_number < *JCEF_THRESHOLD
}

/// Prefix rules for tokens without an explicit prefix, first match wins
const MODERN_PREFIXES: &[(fn(&PrefixContext) -> bool, &str)] = &[
    (is_java17, JCEF_PREFIX),
    (is_java8, JBRX_PREFIX),
    (is_apple_silicon, JCEF_PREFIX),
    (predates_jcef, PLAIN_PREFIX),
];

/// Prefix implied by an explicit variant, or embedded in the version token
pub fn detect_prefix(version: &str, variant: Option<&str>) -> String {
    match variant.filter(|v| !v.is_empty()) {
        Some("sdk") => "jbrsdk-".to_string(),
        Some(variant) => format!("jbr_{}-", variant),
        None => KNOWN_PREFIXES
            .iter()
            .find(|(marker, _)| version.starts_with(marker))
            .map(|(_, prefix)| prefix.to_string())
            .unwrap_or_default(),
    }
}

/// Splits a version token into its major-version and build-number parts.
///
/// The major part starts after the last `-`. If a `b` follows that dash, the
/// major part ends before the last `b` and the build number is what follows
/// it; a `b` directly after the dash leaves both empty.
pub fn split_version(version: &str) -> (&str, &str) {
    let major_start = version.rfind('-').map_or(0, |dash| dash + 1);

    match version.rfind('b') {
        Some(b) if b > major_start => (&version[major_start..b], &version[b + 1..]),
        Some(b) if b == major_start => ("", ""),
        _ => (&version[major_start..], ""),
    }
}

/// Builds the runtime artifact name for `version` on `host`
pub fn build_identifier(
    version: &str,
    variant: Option<&str>,
    architecture: Option<&str>,
    host: &HostInfo,
) -> String {
    let version = match version.strip_prefix('u') {
        Some(_) => format!("8{}", version),
        None => version.to_string(),
    };

    let prefix = detect_prefix(&version, variant);
    let (major, build_text) = split_version(&version);
    let build_number = Version::parse(build_text).unwrap_or_else(|_| ZERO.clone());
    let generation = Generation::of(major);
    let platform = host.os.platform();

    let legacy_format = prefix == LEGACY_PREFIX
        || (generation == Generation::Java8 && build_number < *LEGACY_FORMAT_THRESHOLD);
    if legacy_format {
        return format!(
            "{}{}b{}_{}_{}",
            LEGACY_PREFIX,
            major,
            build_text,
            platform,
            detect_arch(host, false)
        );
    }

    let arch = architecture
        .filter(|a| !a.is_empty())
        .unwrap_or_else(|| detect_arch(host, generation == Generation::Java8));

    let prefix = if prefix.is_empty() {
        let context = PrefixContext {
            generation,
            host,
            arch,
            build_number: &build_number,
        };
        MODERN_PREFIXES
            .iter()
            .find(|(applies, _)| applies(&context))
            .map(|(_, prefix)| *prefix)
            .unwrap_or(JCEF_PREFIX)
            .to_string()
    } else {
        prefix
    };

    format!("{}{}-{}-{}-b{}", prefix, major, platform, arch, build_text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn linux_x64() -> HostInfo {
        HostInfo::new(OperatingSystem::Linux, "x86_64")
    }

    #[rstest]
    #[case("17.0.4b469.44", None, None, "jbr_jcef-17.0.4-linux-x64-b469.44")]
    #[case("17.0.4b469.44", Some("sdk"), None, "jbrsdk-17.0.4-linux-x64-b469.44")]
    #[case("17.0.4b469.44", Some("fd"), None, "jbr_fd-17.0.4-linux-x64-b469.44")]
    #[case("17.0.4b469.44", Some(""), None, "jbr_jcef-17.0.4-linux-x64-b469.44")]
    #[case("17.0.4b469.44", None, Some("aarch64"), "jbr_jcef-17.0.4-linux-aarch64-b469.44")]
    #[case("11_0_11b1341.1", None, None, "jbr_jcef-11_0_11-linux-x64-b1341.1")]
    #[case("11_0_2b159", None, None, "jbr-11_0_2-linux-x64-b159")]
    #[case("jbrsdk-11_0_11b1341.1", None, None, "jbrsdk-11_0_11-linux-x64-b1341.1")]
    #[case("jbr_dcevm-11_0_13b1751.19", None, None, "jbr_dcevm-11_0_13-linux-x64-b1751.19")]
    #[case("8u202b1483.24", None, None, "jbrx-8u202-linux-x64-b1483.24")]
    #[case("u202b1483.37", None, None, "jbrx-8u202-linux-x64-b1483.37")]
    #[case("jbr-17.0.2", None, None, "jbr-17.0.2-linux-x64-b")]
    fn build_identifier_uses_modern_format(
        #[case] version: &str,
        #[case] variant: Option<&str>,
        #[case] architecture: Option<&str>,
        #[case] expected: &str,
    ) {
        assert_eq!(
            build_identifier(version, variant, architecture, &linux_x64()),
            expected
        );
    }

    #[rstest]
    #[case(OperatingSystem::Windows, "x86", "jbrex8u152b1056.6_windows_x86")]
    #[case(OperatingSystem::MacOs, "x86_64", "jbrex8u152b1056.6_osx_x64")]
    #[case(OperatingSystem::Linux, "amd64", "jbrex8u152b1056.6_linux_x64")]
    fn build_identifier_uses_legacy_format_for_old_java8_builds(
        #[case] os: OperatingSystem,
        #[case] arch: &str,
        #[case] expected: &str,
    ) {
        let host = HostInfo::new(os, arch);
        assert_eq!(build_identifier("u152b1056.6", None, None, &host), expected);
        assert_eq!(build_identifier("8u152b1056.6", None, None, &host), expected);
    }

    #[test]
    fn legacy_format_ignores_architecture_hint() {
        let result = build_identifier("8u152b1056.6", None, Some("aarch64"), &linux_x64());
        assert_eq!(result, "jbrex8u152b1056.6_linux_x64");
    }

    #[test]
    fn legacy_format_for_old_java8_builds_drops_variant_prefix() {
        let result = build_identifier("8u152b1056.6", Some("sdk"), None, &linux_x64());
        assert_eq!(result, "jbrex8u152b1056.6_linux_x64");
    }

    #[test]
    fn embedded_jbrex_prefix_selects_legacy_format() {
        let host = HostInfo::new(OperatingSystem::Windows, "x86");
        let result = build_identifier("jbrex8u112b287.2", None, None, &host);

        assert_eq!(result, "jbrexjbrex8u112b287.2_windows_x86");
    }

    #[test]
    fn modern_java8_on_32bit_host_uses_i586() {
        let host = HostInfo::new(OperatingSystem::Linux, "x86");
        assert_eq!(
            build_identifier("8u202b1483.24", None, None, &host),
            "jbrx-8u202-linux-i586-b1483.24"
        );
    }

    #[test]
    fn modern_java11_on_32bit_windows_with_program_files_x86_uses_x64() {
        let host = HostInfo::new(OperatingSystem::Windows, "x86").with_program_files_x86(true);
        assert_eq!(
            build_identifier("11_0_2b159", None, None, &host),
            "jbr-11_0_2-windows-x64-b159"
        );
    }

    #[test]
    fn apple_silicon_prefers_jcef_before_build_threshold() {
        let host = HostInfo::new(OperatingSystem::MacOs, "aarch64");
        assert_eq!(
            build_identifier("11_0_2b159", None, None, &host),
            "jbr_jcef-11_0_2-osx-aarch64-b159"
        );
    }

    #[rstest]
    #[case("jbrsdk-17.0.4b469", None, "jbrsdk-")]
    #[case("jbr_jcef-17.0.4b469", None, "jbr_jcef-")]
    #[case("jbr_nomod-11_0_13b1751", None, "jbr_nomod-")]
    #[case("jbr-11_0_13b1751", None, "jbr-")]
    #[case("jbrx-8u202b1483", None, "jbrx-")]
    #[case("jbrex8u112b287", None, "jbrex")]
    #[case("17.0.4b469", None, "")]
    #[case("17.0.4b469", Some("sdk"), "jbrsdk-")]
    #[case("jbr-17.0.4b469", Some("jcef"), "jbr_jcef-")]
    fn detect_prefix_checks_variant_then_known_prefixes(
        #[case] version: &str,
        #[case] variant: Option<&str>,
        #[case] expected: &str,
    ) {
        assert_eq!(detect_prefix(version, variant), expected);
    }

    #[rstest]
    #[case("17.0.4b469.44", "17.0.4", "469.44")]
    #[case("jbrsdk-11_0_11b1341.1", "11_0_11", "1341.1")]
    #[case("jbr-17.0.2", "17.0.2", "")]
    #[case("17.0.2", "17.0.2", "")]
    #[case("jbr-b123", "", "")]
    fn split_version_separates_major_and_build(
        #[case] version: &str,
        #[case] major: &str,
        #[case] build: &str,
    ) {
        assert_eq!(split_version(version), (major, build));
    }

    #[rstest]
    #[case("8u202", Generation::Java8)]
    #[case("17.0.4", Generation::Java17)]
    #[case("11_0_11", Generation::Other)]
    #[case("21.0.1", Generation::Other)]
    fn generation_is_classified_by_major_prefix(#[case] major: &str, #[case] expected: Generation) {
        assert_eq!(Generation::of(major), expected);
    }
}
