// SPDX-License-Identifier: PMPL-1.0-or-later
//! Assets directory walk.
//!
//! Every regular file below the assets directory, symlinked files included,
//! is grouped by lowercase extension. Entries are visited in file-name order and groups are keyed in
//! sorted order, so the serialized result is stable across runs.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Component, Path};
use tracing::{debug, info};
use walkdir::WalkDir;

/// Extensions counted as image files
pub const IMAGE_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".gif"];

/// Extensions summed on the console `Image files` line, which leaves out GIFs
pub const CONSOLE_IMAGE_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png"];

/// One file found under the assets directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetFile {
    /// Path relative to the working root, `/`-separated
    pub path: String,
    /// Size in bytes
    pub size: u64,
    /// Size in KiB, two decimals
    pub size_kb: f64,
}

/// Assets grouped by extension
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetsInfo {
    /// Sum of all file sizes in bytes
    pub total_size: u64,
    /// Extension with leading dot (`""` when there is none) to files
    pub file_types: BTreeMap<String, Vec<AssetFile>>,
    /// Reserved; always serialized as an empty object
    pub structure: BTreeMap<String, serde_json::Value>,
}

impl AssetsInfo {
    /// Number of files with the given extension
    pub fn count(&self, extension: &str) -> usize {
        self.file_types.get(extension).map_or(0, Vec::len)
    }

    /// Number of image files
    pub fn image_files(&self) -> usize {
        self.count_any(IMAGE_EXTENSIONS)
    }

    /// Number of files across several extensions
    pub fn count_any(&self, extensions: &[&str]) -> usize {
        extensions.iter().map(|ext| self.count(ext)).sum()
    }

    pub fn file_count(&self) -> usize {
        self.file_types.values().map(Vec::len).sum()
    }
}

/// Convert bytes to KiB rounded to two decimals, ties to even
pub fn size_kb(bytes: u64) -> f64 {
    (bytes as f64 / 1024.0 * 100.0).round_ties_even() / 100.0
}

/// Walk `root/assets_dir`; a missing directory yields an empty result
pub fn analyze_assets_directory(root: &Path, assets_dir: &Path) -> Result<AssetsInfo> {
    let mut assets = AssetsInfo::default();
    let base = root.join(assets_dir);

    if !base.exists() {
        info!("No assets directory at {}", base.display());
        return Ok(assets);
    }

    for entry in WalkDir::new(&base).follow_links(false).sort_by_file_name() {
        let entry = entry?;
        let Some(size) = regular_file_size(&entry)? else {
            continue;
        };

        let path = entry.path();
        let relative = relative_path(root, path);
        debug!(path = %relative, size, "asset");

        assets.total_size += size;
        assets
            .file_types
            .entry(extension_key(path))
            .or_default()
            .push(AssetFile {
                path: relative,
                size,
                size_kb: size_kb(size),
            });
    }

    info!(
        "Found {} asset files, {} bytes total",
        assets.file_count(),
        assets.total_size
    );
    Ok(assets)
}

/// Size of a regular file, or of the file a symlink points at
///
/// Symlinked directories are listed but not descended into. Dangling links
/// are skipped.
fn regular_file_size(entry: &walkdir::DirEntry) -> Result<Option<u64>> {
    let file_type = entry.file_type();
    if file_type.is_file() {
        return Ok(Some(entry.metadata()?.len()));
    }
    if !file_type.is_symlink() {
        return Ok(None);
    }
    match std::fs::metadata(entry.path()) {
        Ok(target) if target.is_file() => Ok(Some(target.len())),
        Ok(_) => Ok(None),
        Err(e) => {
            debug!(path = %entry.path().display(), error = %e, "skipping dangling link");
            Ok(None)
        }
    }
}

/// Lowercase extension with leading dot, empty when there is none
fn extension_key(path: &Path) -> String {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if !ext.is_empty() => format!(".{}", ext.to_lowercase()),
        _ => String::new(),
    }
}

/// Path of `path` below `root`, joined with `/`
fn relative_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
