use crate::core::{
    dirs,
    error::{DenError, Result},
    print_success,
};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

pub fn execute_reset() -> Result<()> {
    let config_path = dirs::config_file_path()?;
    if remove_config(&config_path)? {
        log::debug!("Removed {}", config_path.display());
    }
    print_success("Configuration has been reset.");
    Ok(())
}

/// Delete the config file; returns false when there was nothing to delete.
pub fn remove_config(path: &Path) -> Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(DenError::config_remove_failed(path, e)),
    }
}
