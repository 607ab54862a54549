//! Value structures for the two generated Kubernetes manifests.
//!
//! The nesting mirrors the Kubernetes API schema: a CronJob spec holds a
//! job template, whose spec holds a pod template, whose spec holds the
//! containers and volumes. Field names serialize in camelCase, matching
//! the manifest key convention.

use std::collections::BTreeMap;

use serde::Serialize;

use super::ManifestDefaults;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigMap {
    pub api_version: String,
    pub kind: String,
    pub metadata: Metadata,
    pub data: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CronJob {
    pub api_version: String,
    pub kind: String,
    pub metadata: Metadata,
    pub spec: CronJobSpec,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CronJobSpec {
    pub schedule: String,
    pub job_template: JobTemplate,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobTemplate {
    pub spec: JobSpec,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSpec {
    pub template: PodTemplate,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PodTemplate {
    pub spec: PodSpec,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PodSpec {
    pub containers: Vec<Container>,
    pub volumes: Vec<Volume>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Container {
    pub name: String,
    pub image: String,
    pub volume_mounts: Vec<VolumeMount>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeMount {
    pub name: String,
    pub mount_path: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Volume {
    pub name: String,
    pub config_map: ConfigMapVolumeSource,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigMapVolumeSource {
    pub name: String,
}

impl ConfigMap {
    /// Build a ConfigMap carrying the given filename → content entries.
    pub fn new(defaults: &ManifestDefaults, data: BTreeMap<String, String>) -> Self {
        Self {
            api_version: "v1".to_string(),
            kind: "ConfigMap".to_string(),
            metadata: Metadata { name: defaults.config_map_name.clone() },
            data,
        }
    }
}

impl CronJob {
    /// Build the CronJob skeleton with the ConfigMap mounted at `mount_path`.
    ///
    /// The pod spec holds exactly one container and one volume, wired
    /// together through the shared volume name.
    pub fn new(defaults: &ManifestDefaults, mount_path: &str) -> Self {
        Self {
            api_version: "batch/v1".to_string(),
            kind: "CronJob".to_string(),
            metadata: Metadata { name: defaults.cron_job_name.clone() },
            spec: CronJobSpec {
                schedule: defaults.schedule.clone(),
                job_template: JobTemplate {
                    spec: JobSpec {
                        template: PodTemplate {
                            spec: PodSpec {
                                containers: vec![Container {
                                    name: defaults.container_name.clone(),
                                    image: defaults.image.clone(),
                                    volume_mounts: vec![VolumeMount {
                                        name: defaults.volume_name.clone(),
                                        mount_path: mount_path.to_string(),
                                    }],
                                }],
                                volumes: vec![Volume {
                                    name: defaults.volume_name.clone(),
                                    config_map: ConfigMapVolumeSource {
                                        name: defaults.config_map_name.clone(),
                                    },
                                }],
                            },
                        },
                    },
                },
            },
        }
    }
}
