use crate::config::ScanConfig;
use crate::error::{AppError, Argument, Result};
use flate2::read::GzDecoder;
use std::fs::File;
use std::path::{Component, Path, PathBuf};

/// Works out which directory to scan, unpacking the archive first if needed.
pub fn resolve_directory(config: &ScanConfig, work_dir: &Path) -> Result<PathBuf> {
    let archive = match &config.archive {
        Some(archive) => {
            let path = work_dir.join(archive);
            if !path.is_file() {
                return Err(AppError::invalid_argument(Argument::Archive, archive));
            }
            path
        }
        None => work_dir.join(&config.defaults.archive),
    };

    let target = absolutize(
        work_dir,
        config
            .directory
            .as_deref()
            .unwrap_or(&config.defaults.directory),
    );

    if !target.exists() {
        if archive.is_file() {
            extract_archive(&archive, work_dir)?;
        } else {
            log::warn!(
                "Directory {:?} does not exist and no archive is available to populate it",
                target
            );
        }
    }

    if let Some(directory) = &config.directory {
        if !target.is_dir() {
            return Err(AppError::invalid_argument(Argument::Directory, directory));
        }
    }

    Ok(target)
}

/// Joins `path` onto `base` and folds away `.` and `..` without touching the
/// filesystem, so symlinks are left unresolved.
pub fn absolutize(base: &Path, path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in base.join(path).components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}

/// Unpacks a gzip-compressed tar archive into `destination`.
pub fn extract_archive(archive: &Path, destination: &Path) -> Result<()> {
    log::info!("Extracting {:?} into {:?}", archive, destination);
    let file = File::open(archive).map_err(|e| AppError::io(archive, e))?;
    let mut tar = tar::Archive::new(GzDecoder::new(file));
    tar.unpack(destination)
        .map_err(|e| AppError::io(archive, e))?;
    log::debug!("Extraction of {:?} complete", archive);
    Ok(())
}
