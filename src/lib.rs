//! Scan a directory of images, report their EXIF details and flag any whose
//! MD5 digest appears on a hash list. Also home to the epoch converter used by
//! the `epoch_convert` binary.

pub mod blocklist;
pub mod config;
pub mod epoch;
pub mod error;
pub mod metadata;
pub mod owner;
pub mod processor;
pub mod report;
pub mod scan;
pub mod source;
pub mod tags;
pub mod walker;

pub use crate::config::{AppConfig, Cli, ScanConfig, ScanDefaults};
pub use crate::error::{AppError, Argument};
pub use crate::metadata::{Classification, ImageRecord};
pub use crate::scan::{run, ScanSummary};
