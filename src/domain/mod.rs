pub mod defaults;
pub mod error;
pub mod manifest;

pub use defaults::ManifestDefaults;
pub use error::AppError;
pub use manifest::{ConfigMap, CronJob};

/// Output file name for the ConfigMap manifest.
pub const CONFIGMAP_FILE: &str = "configmap.yaml";
/// Output file name for the CronJob manifest.
pub const CRONJOB_FILE: &str = "cronjob.yaml";
/// File extensions packaged into the ConfigMap, in enumeration order.
pub const CONFIG_EXTENSIONS: [&str; 2] = ["xml", "json"];
