// src/metadata.rs

use crate::tags::TagMap;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRecord {
    pub name: String,
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub owner: String,
    pub digest: String,
    pub is_listed: Option<bool>,
    pub camera_make: Option<String>,
    pub camera_model: Option<String>,
    pub date_original: Option<String>,
    pub gps_latitude: Option<String>,
    pub gps_longitude: Option<String>,
    pub gps_date_stamp: Option<String>,
    pub raw_exif: Option<TagMap>,
    pub raw_gps: Option<TagMap>,
}

/// Outcome of looking at one directory entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Image(Box<ImageRecord>),
    NotAnImage,
}
