//! Maven repository metadata (`maven-metadata.xml`) client

use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::version::error::MetadataError;
use crate::version::registry::{MetadataDocument, MetadataSource};

/// Root element of `maven-metadata.xml`
#[derive(Debug, Deserialize)]
#[serde(rename = "metadata")]
struct MavenMetadata {
    #[serde(rename = "groupId")]
    group_id: Option<String>,
    #[serde(rename = "artifactId")]
    artifact_id: Option<String>,
    versioning: Option<Versioning>,
}

#[derive(Debug, Deserialize)]
struct Versioning {
    latest: Option<String>,
    release: Option<String>,
    versions: Option<Versions>,
    #[serde(rename = "lastUpdated")]
    last_updated: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct Versions {
    #[serde(rename = "version", default)]
    entries: Vec<String>,
}

/// Decodes a `maven-metadata.xml` body into a [`MetadataDocument`]
pub fn decode_maven_metadata(url: &str, body: &str) -> Result<MetadataDocument, MetadataError> {
    let malformed = |reason: String| MetadataError::Malformed {
        url: url.to_string(),
        reason,
    };

    let metadata: MavenMetadata = quick_xml::de::from_str(body).map_err(|e| {
        warn!("Failed to parse Maven metadata from {}: {}", url, e);
        malformed(e.to_string())
    })?;

    let versioning = metadata
        .versioning
        .ok_or_else(|| malformed("missing <versioning> element".to_string()))?;
    let versions = versioning
        .versions
        .ok_or_else(|| malformed("missing <versions> element".to_string()))?;

    let entries: Vec<String> = versions
        .entries
        .into_iter()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect();

    if entries.is_empty() {
        return Err(MetadataError::Empty {
            url: url.to_string(),
        });
    }

    Ok(MetadataDocument {
        group_id: metadata.group_id,
        artifact_id: metadata.artifact_id,
        latest: non_blank(versioning.latest),
        release: non_blank(versioning.release),
        versions: entries,
        last_updated: versioning.last_updated,
    })
}

/// `<latest/>` and whitespace-only pointers carry no version.
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Metadata source backed by a blocking HTTP client
pub struct MavenMetadataClient {
    client: Client,
}

impl MavenMetadataClient {
    pub fn new() -> Self {
        Self {
            client: Client::builder()
                .user_agent(concat!("platform-resolver/", env!("CARGO_PKG_VERSION")))
                .build()
                .expect("Failed to create HTTP client"),
        }
    }
}

impl Default for MavenMetadataClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MetadataSource for MavenMetadataClient {
    fn fetch(&self, url: &str) -> Result<MetadataDocument, MetadataError> {
        debug!("Fetching Maven metadata from {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| MetadataError::network(url, e))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Maven repository returned status {}: {}", status, url);
            return Err(MetadataError::Unavailable {
                url: url.to_string(),
                reason: format!("Unexpected status: {}", status),
            });
        }

        let body = response
            .text()
            .map_err(|e| MetadataError::network(url, e))?;

        decode_maven_metadata(url, &body)
    }
}
