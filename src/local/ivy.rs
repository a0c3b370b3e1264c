//! Ivy module descriptors for local installations

use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tempfile::Builder;

use crate::local::error::LocalError;

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename = "ivy-module")]
pub struct IvyModule {
    #[serde(rename = "@version")]
    pub version: String,
    pub info: IvyModuleInfo,
    pub configurations: IvyModuleConfigurations,
    pub publications: IvyModulePublications,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IvyModuleInfo {
    #[serde(rename = "@organisation")]
    pub organisation: String,
    #[serde(rename = "@module")]
    pub module: String,
    #[serde(rename = "@revision")]
    pub revision: String,
    #[serde(rename = "@publication")]
    pub publication: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IvyModuleConfigurations {
    #[serde(rename = "conf", default)]
    pub entries: Vec<IvyModuleConfiguration>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IvyModuleConfiguration {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@visibility")]
    pub visibility: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IvyModulePublications {
    #[serde(rename = "artifact", default)]
    pub entries: Vec<IvyModulePublication>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IvyModulePublication {
    #[serde(rename = "@name")]
    pub name: String,
    #[serde(rename = "@type")]
    pub kind: String,
    #[serde(rename = "@ext", skip_serializing_if = "Option::is_none")]
    pub ext: Option<String>,
    #[serde(rename = "@conf")]
    pub conf: String,
}

impl IvyModule {
    /// Module publishing a single directory artifact in the `default` configuration
    pub fn for_directory(
        organisation: &str,
        module: &str,
        revision: &str,
        publication: &str,
        directory: &Path,
    ) -> Self {
        Self {
            version: "2.0".to_string(),
            info: IvyModuleInfo {
                organisation: organisation.to_string(),
                module: module.to_string(),
                revision: revision.to_string(),
                publication: publication.to_string(),
            },
            configurations: IvyModuleConfigurations {
                entries: vec![IvyModuleConfiguration {
                    name: "default".to_string(),
                    visibility: "public".to_string(),
                }],
            },
            publications: IvyModulePublications {
                entries: vec![IvyModulePublication {
                    name: directory.to_string_lossy().into_owned(),
                    kind: "directory".to_string(),
                    ext: None,
                    conf: "default".to_string(),
                }],
            },
        }
    }

    pub fn to_xml(&self) -> Result<String, LocalError> {
        let mut body = String::new();
        let mut serializer = quick_xml::se::Serializer::new(&mut body);
        serializer.indent(' ', 2);
        self.serialize(serializer)
            .map_err(|e| LocalError::ManifestSerialize {
                module: self.info.module.clone(),
                reason: e.to_string(),
            })?;

        Ok(format!("{}{}\n", XML_DECLARATION, body))
    }

    pub fn from_xml(xml: &str) -> Result<Self, quick_xml::de::DeError> {
        quick_xml::de::from_str(xml)
    }
}

/// Writes `content` to `path` unless a file is already there.
///
/// The content goes to a temporary sibling first and is moved into place with
/// no-clobber semantics, so `path` is either absent or complete. Losing the
/// race to a concurrent writer counts as success.
///
/// Returns `true` when this call created the file.
pub fn write_if_absent(path: &Path, content: &str) -> Result<bool, LocalError> {
    if path.exists() {
        return Ok(false);
    }

    let write_error = |source: std::io::Error| LocalError::ManifestWrite {
        path: path.to_path_buf(),
        source,
    };

    let dir = path.parent().ok_or_else(|| {
        write_error(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "manifest path has no parent directory",
        ))
    })?;
    std::fs::create_dir_all(dir).map_err(write_error)?;

    let mut tmp = Builder::new()
        .prefix(".ivy.")
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(write_error)?;
    tmp.write_all(content.as_bytes()).map_err(write_error)?;
    tmp.as_file().sync_all().map_err(write_error)?;

    match tmp.persist_noclobber(path) {
        Ok(_) => Ok(true),
        Err(e) if e.error.kind() == std::io::ErrorKind::AlreadyExists => Ok(false),
        Err(e) => Err(write_error(e.error)),
    }
}
