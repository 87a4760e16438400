//! Post-install provisioning: config seeding, the PYroclast data layout,
//! and the optional asset download. Runs after every install flow
//! regardless of how the installation step resolved.

pub mod assets;

use crate::config::SetupConfig;
use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DATA_DIR_NAME, DATA_SUBDIRS, EXAMPLE_CONFIG_PATH,
};
use crate::error::{Result, SetupError};
use crate::ui;
use directories::BaseDirs;
use std::fs;
use std::path::{Path, PathBuf};

pub fn run(config: &SetupConfig) -> Result<()> {
    let base_dirs = BaseDirs::new()
        .ok_or_else(|| SetupError::PathError("could not determine the user home directory".to_string()))?;

    seed_config(base_dirs.config_dir(), Path::new(EXAMPLE_CONFIG_PATH))?;
    let data_dir = create_layout(base_dirs.home_dir())?;
    assets::offer_downloads(config, &data_dir)
}

/// Copy the system example config into the user config directory unless
/// a config file already exists there.
pub(crate) fn seed_config(config_root: &Path, example: &Path) -> Result<()> {
    let config_dir = config_root.join(CONFIG_DIR_NAME);
    if config_dir.exists() {
        ui::detail(&format!(
            "Configuration directory exists at {}",
            config_dir.display()
        ));
    } else {
        ui::info(&format!(
            "Creating configuration directory at {}",
            config_dir.display()
        ));
        fs::create_dir_all(&config_dir).map_err(|e| SetupError::Io {
            path: config_dir.clone(),
            source: e,
        })?;
    }

    let config_file = config_dir.join(CONFIG_FILE_NAME);
    if config_file.exists() {
        ui::info(&format!(
            "Configuration file already exists at {}",
            config_file.display()
        ));
        return Ok(());
    }

    if example.exists() {
        ui::info(&format!(
            "Copying example config from {} to {}",
            example.display(),
            config_file.display()
        ));
        fs::copy(example, &config_file).map_err(|e| SetupError::Io {
            path: config_file.clone(),
            source: e,
        })?;
    } else {
        ui::warning(&format!(
            "Example config not found at {}",
            example.display()
        ));
    }
    Ok(())
}

/// Create the PYroclast data directory and its subdirectories
/// idempotently.
pub(crate) fn create_layout(home: &Path) -> Result<PathBuf> {
    let data_dir = home.join(DATA_DIR_NAME);
    let mut directories = vec![data_dir.clone()];
    directories.extend(DATA_SUBDIRS.iter().map(|sub| data_dir.join(sub)));

    for dir in directories {
        if dir.exists() {
            ui::detail(&format!("Directory already exists: {}", dir.display()));
        } else {
            ui::info(&format!("Creating directory: {}", dir.display()));
            fs::create_dir_all(&dir).map_err(|e| SetupError::Io {
                path: dir.clone(),
                source: e,
            })?;
        }
    }
    Ok(data_dir)
}
