use std::fmt;

use serde::Serialize;

/// Artifact coordinate handed to the build graph
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Coordinate {
    pub group: String,
    pub name: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
}

impl Coordinate {
    pub fn new(group: &str, name: &str, version: &str) -> Self {
        Self {
            group: group.to_string(),
            name: name.to_string(),
            version: version.to_string(),
            classifier: None,
            extension: None,
        }
    }

    pub fn with_classifier(mut self, classifier: &str) -> Self {
        self.classifier = Some(classifier.to_string());
        self
    }

    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = Some(extension.to_string());
        self
    }
}

/// Renders Gradle notation: `group:name:version[:classifier][@extension]`
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.name, self.version)?;
        if let Some(classifier) = &self.classifier {
            write!(f, ":{}", classifier)?;
        }
        if let Some(extension) = &self.extension {
            write!(f, "@{}", extension)?;
        }
        Ok(())
    }
}

/// Repository a coordinate must be resolved from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RepositorySource {
    Ivy {
        url: String,
        /// Location of Ivy descriptors; `None` when artifacts carry no descriptor
        ivy_pattern: Option<String>,
        artifact_pattern: String,
        /// Metadata is derived from the artifact alone
        artifact_metadata_only: bool,
    },
}

impl RepositorySource {
    pub fn url(&self) -> &str {
        match self {
            RepositorySource::Ivy { url, .. } => url,
        }
    }
}
