use crate::error::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Lists the regular files directly inside `directory`, sorted by name.
///
/// Subdirectories are not descended into. A missing directory yields nothing.
pub fn list_files(directory: &Path) -> Result<Vec<PathBuf>> {
    log::info!("Searching for images in {:?}", directory);

    if !directory.exists() {
        log::debug!("{:?} does not exist, nothing to scan", directory);
        return Ok(Vec::new());
    }

    let mut paths = Vec::new();
    for entry in WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("Skipping unreadable entry in {:?}: {}", directory, e);
                continue;
            }
        };
        if entry.file_type().is_file() {
            log::trace!("Discovered file: {:?}", entry.path());
            paths.push(entry.into_path());
        } else {
            log::trace!("Skipping non-file entry: {:?}", entry.path());
        }
    }

    log::debug!("Found {} files in {:?}", paths.len(), directory);
    Ok(paths)
}
