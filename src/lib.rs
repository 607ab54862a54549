//! cmcron: package a directory of XML/JSON config files into a Kubernetes
//! ConfigMap manifest and generate a companion CronJob mounting it.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::{Path, PathBuf};

use app::{AppContext, cli, commands::generate};
use services::FilesystemManifestStore;

pub use app::commands::generate::{GenerateOptions, GenerateOutcome};
pub use domain::AppError;

/// Generate `configmap.yaml` and `cronjob.yaml` inside `dir`.
///
/// Values not supplied are collected interactively: the directory first,
/// then — after configmap.yaml has been written — the mount path.
pub fn generate(
    dir: Option<&Path>,
    mount_path: Option<String>,
) -> Result<GenerateOutcome, AppError> {
    let dir = match dir {
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(cli::prompt_directory()?),
    };

    let store = FilesystemManifestStore::new(dir);
    let ctx = AppContext::new(store);

    generate::execute(&ctx, GenerateOptions { mount_path })
}
