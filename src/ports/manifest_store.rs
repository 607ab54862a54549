use std::path::PathBuf;

use crate::domain::AppError;

/// A discovered config file with its base name and full path.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub name: String,
    pub path: PathBuf,
}

/// Access to the directory the manifests are generated from and into.
///
/// Enumeration is non-recursive and matches extensions case-sensitively;
/// the XML pass precedes the JSON pass, each in filesystem order.
pub trait ManifestStore {
    /// List the `.xml` and `.json` files directly inside the directory.
    fn list_config_files(&self) -> Result<Vec<ConfigFile>, AppError>;

    /// Read the full contents of a config file as text.
    fn read_config_file(&self, file: &ConfigFile) -> Result<String, AppError>;

    /// Write a manifest next to the config files, overwriting any existing
    /// file. Returns the path written to.
    fn write_manifest(&self, file_name: &str, yaml: &str) -> Result<PathBuf, AppError>;
}
