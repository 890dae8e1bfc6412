use crate::blocklist::Blocklist;
use crate::error::{AppError, Result};
use crate::metadata::{Classification, ImageRecord};
use crate::owner::find_owner;
use crate::tags::{compose_coordinate, read_tags};
use md5::{Digest, Md5};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Decides whether `path` is an image and, if so, gathers its record.
pub fn classify(path: &Path, blocklist: &Blocklist, verbose: bool) -> Result<Classification> {
    log::trace!("Getting image dimensions for image: {:?}", path);
    let (width, height) = match image_dimensions(path)? {
        Some(dimensions) => dimensions,
        None => {
            log::debug!("Not an image: {:?}", path);
            return Ok(Classification::NotAnImage);
        }
    };
    log::debug!("Dimensions for {:?}: {}x{}", path, width, height);

    let digest = hash_file(path)?;
    log::debug!("Image Hash: {}", digest);

    let mut record = ImageRecord {
        name: path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default(),
        path: path.to_path_buf(),
        width,
        height,
        owner: find_owner(path)?,
        is_listed: blocklist.check(&digest),
        digest,
        camera_make: None,
        camera_model: None,
        date_original: None,
        gps_latitude: None,
        gps_longitude: None,
        gps_date_stamp: None,
        raw_exif: None,
        raw_gps: None,
    };

    if let Some(tags) = read_tags(path)? {
        let exif = &tags.exif;
        record.camera_make = exif.get("Make").map(str::to_string);
        record.camera_model = exif.get("Model").map(str::to_string);
        record.date_original = exif.get("DateTimeOriginal").map(str::to_string);

        let gps = &tags.gps;
        if !gps.is_empty() {
            record.gps_latitude =
                compose_coordinate(gps.get("GPSLatitude"), gps.get("GPSLatitudeRef"));
            record.gps_longitude =
                compose_coordinate(gps.get("GPSLongitude"), gps.get("GPSLongitudeRef"));
            record.gps_date_stamp = gps.get("GPSDateStamp").map(str::to_string);
            if verbose {
                record.raw_gps = Some(tags.gps.clone());
            }
        }

        if verbose {
            record.raw_exif = Some(tags.exif);
        }
    }

    Ok(Classification::Image(Box::new(record)))
}

/// Width and height of the image at `path`, or `None` when it is not one.
///
/// The format is sniffed from the content, with the extension as fallback.
fn image_dimensions(path: &Path) -> Result<Option<(u32, u32)>> {
    let reader = image::io::Reader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|e| AppError::io(path, e))?;
    match reader.into_dimensions() {
        Ok(dimensions) => Ok(Some(dimensions)),
        // Short reads on empty or truncated files are decode failures too.
        Err(e) => {
            log::trace!("Could not decode {:?}: {}", path, e);
            Ok(None)
        }
    }
}

/// Lowercase hex MD5 of the file's bytes.
pub fn hash_file(path: &Path) -> Result<String> {
    log::trace!("Calculating hash for image: {:?}", path);
    let mut file = File::open(path).map_err(|e| AppError::io(path, e))?;
    let mut hasher = Md5::new();
    let mut buffer = [0; 8192];
    loop {
        let n = file.read(&mut buffer).map_err(|e| AppError::io(path, e))?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }
    Ok(format!("{:x}", hasher.finalize()))
}
