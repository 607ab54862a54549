use std::fs;
use std::path::PathBuf;

use crate::domain::{AppError, CONFIG_EXTENSIONS};
use crate::ports::{ConfigFile, ManifestStore};

/// Filesystem-based manifest store implementation.
#[derive(Debug, Clone)]
pub struct FilesystemManifestStore {
    root: PathBuf,
}

impl FilesystemManifestStore {
    /// Create a manifest store for the given directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn files_with_extension(&self, extension: &str) -> Result<Vec<ConfigFile>, AppError> {
        let mut files = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            // Case-sensitive match: `a.XML` does not qualify.
            if path.extension().and_then(|ext| ext.to_str()) != Some(extension) {
                continue;
            }
            let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
                continue;
            };
            files.push(ConfigFile { name: name.to_string(), path });
        }
        Ok(files)
    }
}

impl ManifestStore for FilesystemManifestStore {
    fn list_config_files(&self) -> Result<Vec<ConfigFile>, AppError> {
        if !self.root.is_dir() {
            return Err(AppError::DirectoryNotFound(self.root.display().to_string()));
        }

        let mut files = Vec::new();
        for extension in CONFIG_EXTENSIONS {
            files.extend(self.files_with_extension(extension)?);
        }
        Ok(files)
    }

    fn read_config_file(&self, file: &ConfigFile) -> Result<String, AppError> {
        Ok(fs::read_to_string(&file.path)?)
    }

    fn write_manifest(&self, file_name: &str, yaml: &str) -> Result<PathBuf, AppError> {
        let path = self.root.join(file_name);
        fs::write(&path, yaml)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn store_in(dir: &TempDir) -> FilesystemManifestStore {
        FilesystemManifestStore::new(dir.path().to_path_buf())
    }

    #[test]
    fn lists_xml_files_before_json_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.json"), "{}").unwrap();
        fs::write(dir.path().join("a.xml"), "<a/>").unwrap();

        let files = store_in(&dir).list_config_files().unwrap();
        let names: Vec<&str> = files.iter().map(|file| file.name.as_str()).collect();
        assert_eq!(names, ["a.xml", "b.json"]);
    }

    #[test]
    fn skips_other_extensions_and_uppercase_variants() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.xml"), "<a/>").unwrap();
        fs::write(dir.path().join("b.XML"), "<b/>").unwrap();
        fs::write(dir.path().join("c.txt"), "c").unwrap();
        fs::write(dir.path().join("d.yaml"), "d: 1").unwrap();

        let files = store_in(&dir).list_config_files().unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name, "a.xml");
    }

    #[test]
    fn does_not_recurse_into_subdirectories() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("nested");
        fs::create_dir(&nested).unwrap();
        fs::write(nested.join("deep.xml"), "<deep/>").unwrap();

        let files = store_in(&dir).list_config_files().unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn missing_directory_reports_directory_not_found() {
        let dir = TempDir::new().unwrap();
        let store = FilesystemManifestStore::new(dir.path().join("absent"));

        let err = store.list_config_files().unwrap_err();
        assert!(matches!(err, AppError::DirectoryNotFound(_)));
    }

    #[test]
    fn write_manifest_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let first = store.write_manifest("configmap.yaml", "first: 1\n").unwrap();
        let second = store.write_manifest("configmap.yaml", "second: 2\n").unwrap();

        assert_eq!(first, second);
        assert_eq!(fs::read_to_string(second).unwrap(), "second: 2\n");
    }
}
