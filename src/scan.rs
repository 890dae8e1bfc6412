use crate::blocklist::Blocklist;
use crate::config::ScanConfig;
use crate::error::Result;
use crate::metadata::Classification;
use crate::processor::classify;
use crate::report::write_record;
use crate::source::resolve_directory;
use crate::walker::list_files;
use std::io::Write;
use std::path::Path;

/// Counts gathered over one scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub files: usize,
    pub images: usize,
    pub not_images: usize,
    pub listed: usize,
    pub failed: usize,
}

/// Resolves the source, then classifies and reports every file in turn.
///
/// Relative paths in `config` are taken from `work_dir`, which is also where
/// an archive gets unpacked. Records are written to `out`.
pub fn run<W: Write>(config: &ScanConfig, work_dir: &Path, out: &mut W) -> Result<ScanSummary> {
    let directory = resolve_directory(config, work_dir)?;
    let blocklist = Blocklist::resolve(config, work_dir)?;
    let paths = list_files(&directory)?;

    let mut summary = ScanSummary {
        files: paths.len(),
        ..ScanSummary::default()
    };

    for path in &paths {
        match classify(path, &blocklist, config.verbose) {
            Ok(Classification::Image(record)) => {
                summary.images += 1;
                if record.is_listed == Some(true) {
                    log::warn!("Listed content found: {:?}", path);
                    summary.listed += 1;
                }
                write_record(out, &record)?;
            }
            Ok(Classification::NotAnImage) => summary.not_images += 1,
            Err(e) if e.is_recoverable() => {
                log::warn!("Failed to process {:?}: {}", path, e);
                summary.failed += 1;
            }
            Err(e) => return Err(e),
        }
    }
    out.flush()?;

    log::info!(
        "Scanned {} files: {} images, {} not images, {} listed, {} failed",
        summary.files,
        summary.images,
        summary.not_images,
        summary.listed,
        summary.failed
    );
    Ok(summary)
}
