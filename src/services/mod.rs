mod manifest_filesystem;

pub use manifest_filesystem::FilesystemManifestStore;
