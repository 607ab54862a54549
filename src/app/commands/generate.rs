use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::app::{AppContext, cli};
use crate::domain::{AppError, CONFIGMAP_FILE, CRONJOB_FILE, ConfigMap, CronJob};
use crate::ports::ManifestStore;

/// Options for the generate command.
#[derive(Debug, Default)]
pub struct GenerateOptions {
    /// Mount path for the ConfigMap volume; prompted for when absent.
    pub mount_path: Option<String>,
}

/// Result of a generate run.
#[derive(Debug)]
pub struct GenerateOutcome {
    pub configmap_path: PathBuf,
    pub cronjob_path: PathBuf,
    /// Number of config files packaged into the ConfigMap data map.
    pub entries: usize,
}

/// Execute the generate command.
///
/// Emits configmap.yaml first, then collects the mount path and emits
/// cronjob.yaml. Any I/O or serialization failure propagates immediately;
/// a manifest already written stays on disk.
pub fn execute<S: ManifestStore>(
    ctx: &AppContext<S>,
    options: GenerateOptions,
) -> Result<GenerateOutcome, AppError> {
    let files = ctx.store().list_config_files()?;

    let mut data = BTreeMap::new();
    for file in &files {
        let content = ctx.store().read_config_file(file)?;
        data.insert(file.name.clone(), content);
    }
    let entries = data.len();

    let config_map = ConfigMap::new(ctx.defaults(), data);
    let yaml = serde_yaml::to_string(&config_map)?;
    let configmap_path = ctx.store().write_manifest(CONFIGMAP_FILE, &yaml)?;
    println!("ConfigMap YAML has been created at: {}", configmap_path.display());

    let mount_path = match options.mount_path {
        Some(path) => path,
        None => cli::prompt_mount_path()?,
    };

    let cron_job = CronJob::new(ctx.defaults(), &mount_path);
    let yaml = serde_yaml::to_string(&cron_job)?;
    let cronjob_path = ctx.store().write_manifest(CRONJOB_FILE, &yaml)?;
    println!("CronJob YAML has been created at: {}", cronjob_path.display());

    Ok(GenerateOutcome { configmap_path, cronjob_path, entries })
}
