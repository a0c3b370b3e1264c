//! Local installation fixtures

use std::path::{Path, PathBuf};

use serde_json::json;
use tempfile::TempDir;

/// Fake IDE installation with a `product-info.json`
pub struct Installation {
    pub dir: TempDir,
}

impl Installation {
    pub fn new(product_code: &str, version: &str, build_number: &str) -> Self {
        let dir = TempDir::new().unwrap();
        write_product_info(dir.path(), product_code, version, build_number);
        Self { dir }
    }

    /// macOS bundle layout: `<name>.app/Contents/Resources/product-info.json`
    pub fn bundle(name: &str, product_code: &str, version: &str, build_number: &str) -> (Self, PathBuf) {
        let dir = TempDir::new().unwrap();
        let bundle = dir.path().join(format!("{}.app", name));
        let resources = bundle.join("Contents").join("Resources");
        std::fs::create_dir_all(&resources).unwrap();
        write_product_info(&resources, product_code, version, build_number);
        (Self { dir }, bundle)
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

pub fn write_product_info(dir: &Path, product_code: &str, version: &str, build_number: &str) {
    let content = json!({
        "name": "IntelliJ IDEA",
        "version": version,
        "buildNumber": build_number,
        "productCode": product_code,
        "dataDirectoryName": format!("Idea{}", product_code),
        "launch": [{"os": "Linux", "launcherPath": "bin/idea.sh"}]
    });
    std::fs::write(
        dir.join("product-info.json"),
        serde_json::to_string_pretty(&content).unwrap(),
    )
    .unwrap();
}

/// File names directly under `dir`, sorted
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
