/// Fixed identity fields shared by the generated manifests.
///
/// The defaults reproduce the literals the manifests are known by: the
/// ConfigMap and CronJob names, the container identity, the cron schedule,
/// and the volume name wiring the two resources together.
#[derive(Debug, Clone)]
pub struct ManifestDefaults {
    pub config_map_name: String,
    pub cron_job_name: String,
    pub schedule: String,
    pub container_name: String,
    pub image: String,
    pub volume_name: String,
}

impl Default for ManifestDefaults {
    fn default() -> Self {
        Self {
            config_map_name: "my-config-map".to_string(),
            cron_job_name: "my-cronjob".to_string(),
            schedule: "0 0 * * *".to_string(),
            container_name: "my-container".to_string(),
            image: "my-image:latest".to_string(),
            volume_name: "config-volume".to_string(),
        }
    }
}
