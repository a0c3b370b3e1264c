use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Version specifier asking for the newest published release
pub const VERSION_LATEST: &str = "latest";

/// Oldest platform build a local installation may report
pub const MINIMAL_SUPPORTED_PLATFORM_VERSION: &str = "223";

/// Group of coordinates synthesized for local installations
pub const LOCAL_GROUP: &str = "intellijPlatformLocal";

// =============================================================================
// Default locations
// =============================================================================

pub const DEFAULT_INTELLIJ_REPOSITORY: &str =
    "https://cache-redirector.jetbrains.com/www.jetbrains.com/intellij-repository";

pub const DEFAULT_PLUGIN_VERIFIER_REPOSITORY: &str = "https://cache-redirector.jetbrains.com/packages.jetbrains.team/maven/p/intellij-plugin-verifier/intellij-plugin-verifier";

pub const DEFAULT_JETBRAINS_RUNTIME_REPOSITORY: &str =
    "https://cache-redirector.jetbrains.com/intellij-jbr";

pub const DEFAULT_GITHUB_REPOSITORY: &str = "https://github.com/jetbrains/gradle-intellij-plugin";

/// Directory under the cache root holding synthesized Ivy modules
const IVY_SUBDIRECTORY: &str = "intellijPlatform/ivy";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Resolver configuration structure
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ResolverConfig {
    /// Overrides the process-wide cache location
    pub cache_dir: Option<PathBuf>,
    pub locations: Locations,
}

/// Remote repository roots
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Locations {
    pub intellij_repository: String,
    pub plugin_verifier_repository: String,
    pub jetbrains_runtime_repository: String,
    pub github_repository: String,
}

impl Default for Locations {
    fn default() -> Self {
        Self {
            intellij_repository: DEFAULT_INTELLIJ_REPOSITORY.to_string(),
            plugin_verifier_repository: DEFAULT_PLUGIN_VERIFIER_REPOSITORY.to_string(),
            jetbrains_runtime_repository: DEFAULT_JETBRAINS_RUNTIME_REPOSITORY.to_string(),
            github_repository: DEFAULT_GITHUB_REPOSITORY.to_string(),
        }
    }
}

impl ResolverConfig {
    /// Loads a JSON config file; missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn plugin_verifier_metadata_url(&self) -> String {
        format!(
            "{}/org/jetbrains/intellij/plugins/verifier-cli/maven-metadata.xml",
            self.locations.plugin_verifier_repository.trim_end_matches('/')
        )
    }

    pub fn java_compiler_ant_tasks_metadata_url(&self) -> String {
        format!(
            "{}/releases/com/jetbrains/intellij/java/java-compiler-ant-tasks/maven-metadata.xml",
            self.locations.intellij_repository.trim_end_matches('/')
        )
    }

    /// Returns the cache root, honoring `cacheDir` before the XDG default.
    pub fn cache_dir(&self) -> PathBuf {
        self.cache_dir.clone().unwrap_or_else(cache_dir)
    }

    /// Returns the directory holding synthesized Ivy modules.
    pub fn ivy_dir(&self) -> PathBuf {
        self.cache_dir().join(IVY_SUBDIRECTORY)
    }
}

/// Returns the path to the cache directory for platform-resolver.
/// Uses $XDG_CACHE_HOME/platform-resolver if XDG_CACHE_HOME is set,
/// otherwise falls back to ~/.cache/platform-resolver,
/// or ./platform-resolver if neither is available.
pub fn cache_dir() -> PathBuf {
    cache_dir_with_env(std::env::var("XDG_CACHE_HOME").ok(), dirs::home_dir())
}

/// Returns the default path of the log file.
pub fn log_path() -> PathBuf {
    cache_dir().join("platform-resolver.log")
}

fn cache_dir_with_env(xdg_cache_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let cache_dir = xdg_cache_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".cache")))
        .unwrap_or_else(|| PathBuf::from("."));

    cache_dir.join("platform-resolver")
}
