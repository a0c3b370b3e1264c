//! Closest version resolution

use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::ResolverConfig;
use crate::version::error::{ResolveError, VersionError};
use crate::version::registry::MetadataSource;
use crate::version::resolver::Resolver;
use crate::version::types::{Version, max_of};

/// Resolves the newest published version that does not exceed a ceiling.
///
/// Unlike [`LatestVersionResolver`](super::LatestVersionResolver), this scans
/// the whole listing of the metadata document.
#[derive(Clone)]
pub struct ClosestVersionResolver {
    subject: String,
    url: String,
    ceiling: Version,
    metadata: Arc<dyn MetadataSource>,
}

impl ClosestVersionResolver {
    pub fn new(
        subject: &str,
        url: &str,
        ceiling: Version,
        metadata: Arc<dyn MetadataSource>,
    ) -> Self {
        Self {
            subject: subject.to_string(),
            url: url.to_string(),
            ceiling,
            metadata,
        }
    }

    /// Java compiler Ant tasks release matching a platform build
    pub fn java_compiler_ant_tasks(
        config: &ResolverConfig,
        platform_build: Version,
        metadata: Arc<dyn MetadataSource>,
    ) -> Self {
        Self::new(
            "Java Compiler Ant Tasks",
            &config.java_compiler_ant_tasks_metadata_url(),
            platform_build,
            metadata,
        )
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Resolver for ClosestVersionResolver {
    type Output = Version;

    fn subject(&self) -> &str {
        &self.subject
    }

    fn resolve(&self) -> Result<Version, ResolveError> {
        debug!(
            "Resolving the {} version closest to {} from: {}",
            self.subject, self.ceiling, self.url
        );

        let document = self
            .metadata
            .fetch(&self.url)
            .map_err(|source| ResolveError::Metadata {
                subject: self.subject.clone(),
                source,
            })?;

        let compatible = document
            .versions
            .iter()
            .filter_map(|entry| match Version::parse(entry) {
                Ok(version) => Some(version),
                Err(e) => {
                    warn!("Skipping {} listing entry: {}", self.subject, e);
                    None
                }
            })
            .filter(|version| version <= &self.ceiling);

        max_of(compatible).map_err(|e| match e {
            VersionError::NoCandidates => ResolveError::NoCompatibleVersion {
                subject: self.subject.clone(),
                ceiling: self.ceiling.clone(),
            },
            source => ResolveError::Version {
                subject: self.subject.clone(),
                source,
            },
        })
    }
}
