//! Latest version resolution

use std::sync::Arc;

use tracing::debug;

use crate::config::ResolverConfig;
use crate::version::error::ResolveError;
use crate::version::registry::{MetadataSource, ReleaseProbe};
use crate::version::resolver::Resolver;
use crate::version::types::Version;

/// Where the "latest" answer comes from
#[derive(Clone)]
enum LatestSource {
    /// Explicit `<latest>` entry of a Maven metadata document
    Maven(Arc<dyn MetadataSource>),
    /// Target of the `releases/latest` redirect of a GitHub repository
    GitHub(Arc<dyn ReleaseProbe>),
}

/// Resolves the newest published version of a subject.
///
/// The Maven strategy trusts the publisher's `<latest>` marker and never scans
/// the listing; a document without it is an error.
#[derive(Clone)]
pub struct LatestVersionResolver {
    subject: String,
    url: String,
    source: LatestSource,
}

impl LatestVersionResolver {
    /// Resolver reading `<latest>` from the metadata document at `url`
    pub fn from_maven(subject: &str, url: &str, metadata: Arc<dyn MetadataSource>) -> Self {
        Self {
            subject: subject.to_string(),
            url: url.to_string(),
            source: LatestSource::Maven(metadata),
        }
    }

    /// Resolver sniffing the `releases/latest` redirect of the repository at `url`
    pub fn from_github(subject: &str, url: &str, probe: Arc<dyn ReleaseProbe>) -> Self {
        Self {
            subject: subject.to_string(),
            url: url.to_string(),
            source: LatestSource::GitHub(probe),
        }
    }

    /// Latest IntelliJ Plugin Verifier CLI
    pub fn plugin_verifier(config: &ResolverConfig, metadata: Arc<dyn MetadataSource>) -> Self {
        Self::from_maven(
            "IntelliJ Plugin Verifier",
            &config.plugin_verifier_metadata_url(),
            metadata,
        )
    }

    /// Latest release of the build plugin itself
    pub fn build_plugin(config: &ResolverConfig, probe: Arc<dyn ReleaseProbe>) -> Self {
        Self::from_github(
            "IntelliJ Platform Gradle Plugin",
            &config.locations.github_repository,
            probe,
        )
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn resolve_from_metadata(&self, metadata: &dyn MetadataSource) -> Result<Version, ResolveError> {
        let document = metadata
            .fetch(&self.url)
            .map_err(|source| ResolveError::Metadata {
                subject: self.subject.clone(),
                source,
            })?;

        let latest = document
            .latest
            .ok_or_else(|| ResolveError::NoLatestPointer {
                subject: self.subject.clone(),
                url: self.url.clone(),
            })?;

        Version::parse(&latest).map_err(|source| ResolveError::Version {
            subject: self.subject.clone(),
            source,
        })
    }

    fn resolve_from_redirect(&self, probe: &dyn ReleaseProbe) -> Result<Version, ResolveError> {
        let failed = |reason: String| ResolveError::RedirectResolutionFailed {
            subject: self.subject.clone(),
            url: self.url.clone(),
            reason,
        };

        let location = probe.latest_release_location(&self.url).map_err(failed)?;

        version_from_location(&location).map_err(failed)
    }
}

/// Takes the last path segment of a release URL and parses it as a version,
/// dropping one leading `v`.
pub fn version_from_location(location: &str) -> Result<Version, String> {
    let tag = location
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default();
    let tag = tag.strip_prefix('v').unwrap_or(tag);

    Version::parse(tag).map_err(|e| e.to_string())
}

impl Resolver for LatestVersionResolver {
    type Output = Version;

    fn subject(&self) -> &str {
        &self.subject
    }

    fn resolve(&self) -> Result<Version, ResolveError> {
        debug!("Resolving the latest '{}' version from: {}", self.subject, self.url);

        match &self.source {
            LatestSource::Maven(metadata) => self.resolve_from_metadata(metadata.as_ref()),
            LatestSource::GitHub(probe) => self.resolve_from_redirect(probe.as_ref()),
        }
    }
}
