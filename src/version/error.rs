use thiserror::Error;

use crate::version::types::Version;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VersionError {
    #[error("Malformed version: '{0}' contains no numeric segment")]
    Malformed(String),

    #[error("No candidates: cannot pick the maximum of an empty version set")]
    NoCandidates,
}

#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("Metadata unavailable at {url}: {reason}")]
    Unavailable { url: String, reason: String },

    #[error("Malformed metadata at {url}: {reason}")]
    Malformed { url: String, reason: String },

    #[error("Metadata at {url} lists no versions")]
    Empty { url: String },
}

impl MetadataError {
    pub(crate) fn network(url: &str, error: reqwest::Error) -> Self {
        Self::Unavailable {
            url: url.to_string(),
            reason: error.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Cannot resolve the {subject} version: {source}")]
    Metadata {
        subject: String,
        #[source]
        source: MetadataError,
    },

    #[error("Cannot resolve the latest '{subject}' version from: {url} (no <latest> entry)")]
    NoLatestPointer { subject: String, url: String },

    #[error("Cannot resolve the latest '{subject}' version from: {url}: {reason}")]
    RedirectResolutionFailed {
        subject: String,
        url: String,
        reason: String,
    },

    #[error("Cannot resolve the {subject} version closest to {ceiling}")]
    NoCompatibleVersion { subject: String, ceiling: Version },

    #[error("Cannot resolve the {subject} version: {source}")]
    Version {
        subject: String,
        #[source]
        source: VersionError,
    },
}
