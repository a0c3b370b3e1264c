//! Reading the product descriptor of an installed IDE

use std::path::{Path, PathBuf};

#[cfg(test)]
use mockall::automock;
use serde::Deserialize;
use tracing::debug;

use crate::local::error::LocalError;

const PRODUCT_INFO_FILE: &str = "product-info.json";

/// Subset of `product-info.json` this crate relies on
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProductInfo {
    #[serde(default)]
    pub name: Option<String>,
    pub version: String,
    #[serde(default)]
    pub version_suffix: Option<String>,
    pub build_number: String,
    pub product_code: String,
}

/// Trait for reading product information from an installation directory
#[cfg_attr(test, automock)]
pub trait ProductInfoReader: Send + Sync {
    fn read(&self, directory: &Path) -> Result<ProductInfo, LocalError>;
}

/// Reads `product-info.json` from the directory or its `Resources/` child
#[derive(Debug, Default, Clone, Copy)]
pub struct ProductInfoFile;

impl ProductInfoFile {
    fn locate(directory: &Path) -> Option<PathBuf> {
        [
            directory.join(PRODUCT_INFO_FILE),
            directory.join("Resources").join(PRODUCT_INFO_FILE),
        ]
        .into_iter()
        .find(|candidate| candidate.is_file())
    }
}

impl ProductInfoReader for ProductInfoFile {
    fn read(&self, directory: &Path) -> Result<ProductInfo, LocalError> {
        let path = Self::locate(directory).ok_or_else(|| LocalError::ProductInfoUnreadable {
            path: directory.to_path_buf(),
            reason: format!("{} not found", PRODUCT_INFO_FILE),
        })?;
        debug!("Reading product information from {:?}", path);

        let content =
            std::fs::read_to_string(&path).map_err(|e| LocalError::ProductInfoUnreadable {
                path: path.clone(),
                reason: e.to_string(),
            })?;

        serde_json::from_str(&content).map_err(|e| LocalError::ProductInfoUnreadable {
            path,
            reason: e.to_string(),
        })
    }
}
