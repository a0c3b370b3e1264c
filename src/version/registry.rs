//! Traits for reading published versions from remote sources

#[cfg(test)]
use mockall::automock;

use crate::version::error::MetadataError;

/// A decoded package-index document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataDocument {
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    /// Explicit "latest" pointer published alongside the listing
    pub latest: Option<String>,
    pub release: Option<String>,
    /// Published versions in document order
    pub versions: Vec<String>,
    pub last_updated: Option<String>,
}

/// Trait for fetching a metadata document from a URL
#[cfg_attr(test, automock)]
pub trait MetadataSource: Send + Sync {
    /// Fetches and decodes the metadata document at `url`
    ///
    /// # Returns
    /// * `Ok(MetadataDocument)` - Document with a non-empty version listing
    /// * `Err(MetadataError)` - Network, decode, or empty-listing failure
    fn fetch(&self, url: &str) -> Result<MetadataDocument, MetadataError>;
}

/// Trait for reading the target of a "latest release" redirect
#[cfg_attr(test, automock)]
pub trait ReleaseProbe: Send + Sync {
    /// Requests `<repository_root>/releases/latest` without following redirects
    /// and returns the raw `Location` header value.
    fn latest_release_location(&self, repository_root: &str) -> Result<String, String>;
}
