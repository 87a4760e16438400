//! Shader/texture bundle download and extraction.
//!
//! The bundle is a pinned snapshot of the reshade-shaders repository,
//! fetched as a ZIP archive, unpacked into a temporary staging directory,
//! and merge-copied into the PYroclast layout.

use crate::config::SetupConfig;
use crate::constants::{
    SHADERS_DIR_NAME, TEXTURES_DIR_NAME, reshade_archive_root, reshade_archive_url,
};
use crate::error::{Result, SetupError};
use crate::ui;
use std::fs;
use std::io;
use std::path::Path;

pub fn offer_downloads(config: &SetupConfig, data_dir: &Path) -> Result<()> {
    if config.no_assets {
        ui::info("Skipping download of shaders and textures.");
        return Ok(());
    }

    let shaders = config.assume_yes || ui::prompt_yes_no("Download shaders from GitHub?");
    let textures = config.assume_yes || ui::prompt_yes_no("Download textures from GitHub?");
    if !shaders && !textures {
        ui::info("Skipping download of shaders and textures.");
        return Ok(());
    }

    let staging = tempfile::tempdir()?;
    fetch_archive(&reshade_archive_url(), staging.path())?;
    let extracted = staging.path().join(reshade_archive_root());

    if shaders {
        let dest = data_dir.join(SHADERS_DIR_NAME);
        ui::info(&format!("Copying shaders to {}...", dest.display()));
        copy_tree(&extracted.join("Shaders"), &dest)?;
    }
    if textures {
        let dest = data_dir.join(TEXTURES_DIR_NAME);
        ui::info(&format!("Copying textures to {}...", dest.display()));
        copy_tree(&extracted.join("Textures"), &dest)?;
    }
    Ok(())
}

/// Download a ZIP archive and unpack it into `dest`.
pub(crate) fn fetch_archive(url: &str, dest: &Path) -> Result<()> {
    ui::info(&format!("Downloading from {} ...", url));
    let client = reqwest::blocking::Client::new();
    let response = client
        .get(url)
        .header("User-Agent", "pyroclast-setup")
        .send()
        .map_err(|e| SetupError::RemoteFetchError(format!("Network error: {}", e)))?;

    if !response.status().is_success() {
        return Err(SetupError::RemoteFetchError(format!(
            "Server returned {} for {}",
            response.status(),
            url
        )));
    }

    let bytes = response
        .bytes()
        .map_err(|e| SetupError::RemoteFetchError(e.to_string()))?;
    ui::info("Download complete. Extracting...");
    extract_zip(&bytes, dest)?;
    ui::info("Extraction complete.");
    Ok(())
}

/// Unpack ZIP bytes into `dest`, skipping entries whose names would
/// escape the destination.
pub(crate) fn extract_zip(bytes: &[u8], dest: &Path) -> Result<()> {
    let cursor = io::Cursor::new(bytes);
    let mut archive =
        zip::ZipArchive::new(cursor).map_err(|e| SetupError::ArchiveError(e.to_string()))?;

    for index in 0..archive.len() {
        let mut entry = archive
            .by_index(index)
            .map_err(|e| SetupError::ArchiveError(e.to_string()))?;

        let Some(relative) = entry.enclosed_name() else {
            ui::warning(&format!("Skipping archive entry with unsafe path: {}", entry.name()));
            continue;
        };
        let target = dest.join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&target).map_err(|e| SetupError::Io {
                path: target.clone(),
                source: e,
            })?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(|e| SetupError::Io {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
            let mut file = fs::File::create(&target).map_err(|e| SetupError::Io {
                path: target.clone(),
                source: e,
            })?;
            io::copy(&mut entry, &mut file)?;
        }
    }
    Ok(())
}

/// Recursive merge copy; existing files are overwritten.
pub(crate) fn copy_tree(src: &Path, dst: &Path) -> Result<()> {
    if !src.exists() {
        ui::warning(&format!("Source directory {} not found.", src.display()));
        return Ok(());
    }

    fs::create_dir_all(dst).map_err(|e| SetupError::Io {
        path: dst.to_path_buf(),
        source: e,
    })?;
    for entry in fs::read_dir(src).map_err(|e| SetupError::Io {
        path: src.to_path_buf(),
        source: e,
    })? {
        let entry = entry?;
        let target = dst.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_tree(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target).map_err(|e| SetupError::Io {
                path: target.clone(),
                source: e,
            })?;
        }
    }
    ui::detail(&format!(
        "Copied contents from {} to {}",
        src.display(),
        dst.display()
    ));
    Ok(())
}
