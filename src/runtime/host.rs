//! Host identification used by the runtime name builder

/// Operating system family of the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatingSystem {
    Windows,
    MacOs,
    Linux,
    Other,
}

impl OperatingSystem {
    /// Maps a `std::env::consts::OS` style identifier
    pub fn from_os_name(name: &str) -> Self {
        match name {
            "windows" => OperatingSystem::Windows,
            "macos" => OperatingSystem::MacOs,
            "linux" => OperatingSystem::Linux,
            _ => OperatingSystem::Other,
        }
    }

    /// Platform token used in runtime artifact names
    pub fn platform(&self) -> &'static str {
        match self {
            OperatingSystem::Windows => "windows",
            OperatingSystem::MacOs => "osx",
            OperatingSystem::Linux | OperatingSystem::Other => "linux",
        }
    }
}

/// Read-only facts about the executing host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostInfo {
    pub os: OperatingSystem,
    /// Raw processor architecture identifier (`x86_64`, `amd64`, `aarch64`, ...)
    pub arch: String,
    /// Whether the Windows `ProgramFiles(x86)` variable is present
    pub program_files_x86: bool,
}

impl HostInfo {
    pub fn new(os: OperatingSystem, arch: &str) -> Self {
        Self {
            os,
            arch: arch.to_string(),
            program_files_x86: false,
        }
    }

    pub fn with_program_files_x86(mut self, present: bool) -> Self {
        self.program_files_x86 = present;
        self
    }

    /// Describes the machine this process runs on
    pub fn current() -> Self {
        Self {
            os: OperatingSystem::from_os_name(std::env::consts::OS),
            arch: std::env::consts::ARCH.to_string(),
            program_files_x86: std::env::var_os("ProgramFiles(x86)").is_some(),
        }
    }
}

impl Default for HostInfo {
    fn default() -> Self {
        Self::current()
    }
}

fn is_arm64(host: &HostInfo) -> bool {
    matches!(host.arch.as_str(), "aarch64" | "arm64")
}

fn is_x86_64(host: &HostInfo) -> bool {
    matches!(host.arch.as_str(), "x86_64" | "amd64")
}

fn is_64bit_windows(host: &HostInfo) -> bool {
    host.os == OperatingSystem::Windows && host.program_files_x86
}

/// Ordered architecture rules, first match wins
const ARCHITECTURES: &[(fn(&HostInfo) -> bool, &str)] = &[
    (is_arm64, "aarch64"),
    (is_x86_64, "x64"),
    (is_64bit_windows, "x64"),
];

/// Architecture token for runtime artifact names.
///
/// Hosts matching no rule are 32-bit: `i586` in the new naming format, `x86`
/// in the old one.
pub fn detect_arch(host: &HostInfo, new_format: bool) -> &'static str {
    ARCHITECTURES
        .iter()
        .find(|(rule, _)| rule(host))
        .map(|(_, token)| *token)
        .unwrap_or(if new_format { "i586" } else { "x86" })
}
