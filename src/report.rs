use crate::metadata::ImageRecord;
use std::fmt::Write as _;
use std::io::{self, Write};

/// Width the field names are padded to.
pub const KEY_WIDTH: usize = 15;

/// Labelled fields of a record, in display order. Absent fields are left out.
pub fn record_fields(record: &ImageRecord) -> Vec<(&'static str, String)> {
    let mut fields = Vec::new();
    if let Some(listed) = record.is_listed {
        fields.push(("Illicit", listed.to_string()));
    }
    fields.push(("Image Name", record.name.clone()));
    fields.push(("Path", record.path.display().to_string()));
    fields.push(("Size (WxH)", format!("({}, {})", record.width, record.height)));
    fields.push(("Owner", record.owner.clone()));

    let optional = [
        ("Camera Make", &record.camera_make),
        ("Camera Model", &record.camera_model),
        ("Date", &record.date_original),
        ("GPSLatitude", &record.gps_latitude),
        ("GPSLongitude", &record.gps_longitude),
        ("GPS DateStamp", &record.gps_date_stamp),
    ];
    for (label, value) in optional {
        if let Some(value) = value {
            fields.push((label, value.clone()));
        }
    }

    if let Some(gps) = &record.raw_gps {
        fields.push(("Raw GPSInfo", gps.to_string()));
    }
    if let Some(exif) = &record.raw_exif {
        fields.push(("Raw Exif", exif.to_string()));
    }
    fields
}

/// Renders a record as aligned `name: value` lines and a trailing blank line.
pub fn format_record(record: &ImageRecord) -> String {
    let mut out = String::new();
    for (label, value) in record_fields(record) {
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{:<width$}: {}", label, value, width = KEY_WIDTH);
    }
    out.push('\n');
    out
}

pub fn write_record<W: Write>(out: &mut W, record: &ImageRecord) -> io::Result<()> {
    out.write_all(format_record(record).as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::TagBlocks;
    use exif::{Field, In, Tag, Value};
    use std::path::PathBuf;

    fn record() -> ImageRecord {
        ImageRecord {
            name: "cat.jpg".to_string(),
            path: PathBuf::from("/data/images/cat.jpg"),
            width: 640,
            height: 480,
            owner: "jake".to_string(),
            digest: "9e107d9d372bb6826bd81d3542a419d6".to_string(),
            is_listed: None,
            camera_make: None,
            camera_model: None,
            date_original: None,
            gps_latitude: None,
            gps_longitude: None,
            gps_date_stamp: None,
            raw_exif: None,
            raw_gps: None,
        }
    }

    #[test]
    fn minimal_record_layout() {
        assert_eq!(
            format_record(&record()),
            "Image Name     : cat.jpg\n\
             Path           : /data/images/cat.jpg\n\
             Size (WxH)     : (640, 480)\n\
             Owner          : jake\n\
             \n"
        );
    }

    #[test]
    fn illicit_comes_first_when_present() {
        let mut rec = record();
        rec.is_listed = Some(true);
        let text = format_record(&rec);
        assert!(text.starts_with("Illicit        : true\n"));
    }

    #[test]
    fn optional_fields_follow_owner_in_order() {
        let mut rec = record();
        rec.camera_make = Some("Canon".to_string());
        rec.date_original = Some("2018:07:27 10:00:00".to_string());
        rec.gps_latitude = Some("(37/1, 46/1, 2964/100)N".to_string());
        rec.gps_date_stamp = Some("2018:07:27".to_string());

        let labels: Vec<&str> = record_fields(&rec).into_iter().map(|(l, _)| l).collect();
        assert_eq!(
            labels,
            vec![
                "Image Name",
                "Path",
                "Size (WxH)",
                "Owner",
                "Camera Make",
                "Date",
                "GPSLatitude",
                "GPS DateStamp",
            ]
        );
    }

    #[test]
    fn raw_blocks_are_printed_last() {
        let fields = [Field {
            tag: Tag::Make,
            ifd_num: In::PRIMARY,
            value: Value::Ascii(vec![b"Canon".to_vec()]),
        }];
        let mut rec = record();
        rec.raw_exif = Some(TagBlocks::from_fields(&fields).exif);

        let text = format_record(&rec);
        assert!(text.ends_with("Raw Exif       : {Make: Canon}\n\n"));
    }

    #[test]
    fn empty_raw_gps_block_prints_braces() {
        let mut rec = record();
        rec.raw_gps = Some(Default::default());
        assert!(format_record(&rec).contains("Raw GPSInfo    : {}\n"));
    }
}
