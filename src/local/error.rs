use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LocalError {
    #[error("Specified localPath '{}' doesn't exist or is not a directory", .0.display())]
    InstallationNotFound(PathBuf),

    #[error("Cannot read product information from '{}': {reason}", .path.display())]
    ProductInfoUnreadable { path: PathBuf, reason: String },

    #[error(
        "The minimal supported IDE version is {required}+, the provided version is too low: {version} ({build_number})"
    )]
    UnsupportedPlatformVersion {
        required: String,
        version: String,
        build_number: String,
    },

    #[error("Failed to write Ivy module '{}': {source}", .path.display())]
    ManifestWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize Ivy module for {module}: {reason}")]
    ManifestSerialize { module: String, reason: String },
}
