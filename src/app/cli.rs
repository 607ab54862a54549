//! Interactive prompt helpers for values not supplied as flags.

use dialoguer::Input;

use crate::domain::AppError;

/// Ask for the directory containing the XML and JSON config files.
pub fn prompt_directory() -> Result<String, AppError> {
    Input::new()
        .with_prompt("Please enter the path to the directory containing XML and JSON files")
        .interact_text()
        .map_err(|e| AppError::prompt_error(format!("Directory prompt failed: {e}")))
}

/// Ask where the ConfigMap should be mounted inside the container.
pub fn prompt_mount_path() -> Result<String, AppError> {
    Input::new()
        .with_prompt("Please enter the path where the ConfigMap should be mounted (e.g., /app/Common)")
        .interact_text()
        .map_err(|e| AppError::prompt_error(format!("Mount path prompt failed: {e}")))
}
