//! Remote sources of published versions

pub mod github;
pub mod maven;

pub use github::GitHubReleaseProbe;
pub use maven::{MavenMetadataClient, decode_maven_metadata};
