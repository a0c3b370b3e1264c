//! Local IDE installations as resolvable dependencies
//!
//! A local installation has no published metadata, so an Ivy module describing
//! it is synthesized into the cache once and a repository source pointing at
//! the manifest directory is handed back to the caller.
//!
//! - [`product_info`]: Reading `product-info.json`
//! - [`ivy`]: Ivy module model and create-if-absent writes
//! - [`error`]: Failure taxonomy

pub mod error;
pub mod ivy;
pub mod product_info;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info};

use crate::config::{LOCAL_GROUP, MINIMAL_SUPPORTED_PLATFORM_VERSION};
use crate::dependencies::{Coordinate, RepositorySource};
use crate::runtime::{HostInfo, OperatingSystem};
use crate::version::Version;

pub use error::LocalError;
pub use ivy::IvyModule;
pub use product_info::{ProductInfo, ProductInfoFile, ProductInfoReader};

const PUBLICATION_FORMAT: &str = "%Y%m%d%H%M%S";

/// Outcome of describing a local installation
#[derive(Debug, Clone, PartialEq)]
pub struct LocalDescriptor {
    pub coordinate: Coordinate,
    pub repository: RepositorySource,
    pub manifest_path: PathBuf,
    pub product_info: ProductInfo,
    /// Whether this call wrote the manifest
    pub created: bool,
}

/// Synthesizes Ivy modules for local installations
pub struct LocalInstallationSynthesizer {
    ivy_dir: PathBuf,
    host: HostInfo,
    reader: Arc<dyn ProductInfoReader>,
}

impl LocalInstallationSynthesizer {
    pub fn new(ivy_dir: PathBuf, host: HostInfo, reader: Arc<dyn ProductInfoReader>) -> Self {
        Self {
            ivy_dir,
            host,
            reader,
        }
    }

    pub fn ivy_dir(&self) -> &Path {
        &self.ivy_dir
    }

    /// Describes the installation at `path` as a coordinate plus the Ivy
    /// repository that serves it.
    ///
    /// The manifest is written only when absent; repeated calls for the same
    /// product code and version reuse the existing file untouched.
    pub fn describe_local(&self, path: &Path) -> Result<LocalDescriptor, LocalError> {
        let directory = installation_root(path, self.host.os);
        if !directory.is_dir() {
            return Err(LocalError::InstallationNotFound(path.to_path_buf()));
        }

        let product_info = self.reader.read(&directory)?;
        ensure_supported(&directory, &product_info)?;

        // The manifest outlives the working directory it was written from.
        let directory = std::path::absolute(&directory)
            .map_err(|_| LocalError::InstallationNotFound(path.to_path_buf()))?;

        let coordinate = Coordinate::new(
            LOCAL_GROUP,
            &product_info.product_code,
            &product_info.version,
        );
        let manifest_path = self.ivy_dir.join(format!(
            "{}-{}.xml",
            product_info.product_code, product_info.version
        ));

        let created = if manifest_path.exists() {
            debug!("Reusing Ivy module {:?}", manifest_path);
            false
        } else {
            let publication = chrono::Local::now().format(PUBLICATION_FORMAT).to_string();
            let module = IvyModule::for_directory(
                &coordinate.group,
                &coordinate.name,
                &coordinate.version,
                &publication,
                &directory,
            );
            let created = ivy::write_if_absent(&manifest_path, &module.to_xml()?)?;
            if created {
                info!(
                    "Created Ivy module {:?} for {}:{}",
                    manifest_path, coordinate.name, coordinate.version
                );
            }
            created
        };

        let artifact_pattern = directory.to_string_lossy().into_owned();
        let repository = RepositorySource::Ivy {
            url: self.ivy_dir.to_string_lossy().into_owned(),
            ivy_pattern: Some(format!(
                "{}/[module]-[revision].[ext]",
                self.ivy_dir.to_string_lossy()
            )),
            artifact_pattern,
            artifact_metadata_only: false,
        };

        Ok(LocalDescriptor {
            coordinate,
            repository,
            manifest_path,
            product_info,
            created,
        })
    }
}

/// macOS application bundles keep the installation under `Contents/`.
pub fn installation_root(path: &Path, os: OperatingSystem) -> PathBuf {
    match (os, path.extension()) {
        (OperatingSystem::MacOs, Some(ext)) if ext == "app" => path.join("Contents"),
        _ => path.to_path_buf(),
    }
}

fn ensure_supported(directory: &Path, product_info: &ProductInfo) -> Result<(), LocalError> {
    let unreadable = |reason: String| LocalError::ProductInfoUnreadable {
        path: directory.to_path_buf(),
        reason,
    };
    let build = Version::parse(&product_info.build_number).map_err(|e| unreadable(e.to_string()))?;
    let floor =
        Version::parse(MINIMAL_SUPPORTED_PLATFORM_VERSION).map_err(|e| unreadable(e.to_string()))?;

    if build < floor {
        return Err(LocalError::UnsupportedPlatformVersion {
            required: MINIMAL_SUPPORTED_PLATFORM_VERSION.to_string(),
            version: product_info.version.clone(),
            build_number: product_info.build_number.clone(),
        });
    }
    Ok(())
}
