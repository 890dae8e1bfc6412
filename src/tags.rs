// src/tags.rs

use crate::error::{AppError, Result};
use exif::{Context, Field, In, Reader, Tag, Value};
use std::fmt;
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;

/// IFD pointers are structural and carry no metadata of their own.
const POINTER_TAGS: [Tag; 3] = [
    Tag::ExifIFDPointer,
    Tag::GPSInfoIFDPointer,
    Tag::InteropIFDPointer,
];

/// Named tags of the primary image, with GPS tags split into their own block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagBlocks {
    pub exif: TagMap,
    pub gps: TagMap,
}

/// Tag name/value pairs in the order they appear in the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagMap(Vec<(String, String)>);

impl TagMap {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn insert(&mut self, name: String, value: String) {
        if self.get(&name).is_none() {
            self.0.push((name, value));
        }
    }
}

impl fmt::Display for TagMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (name, value)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", name, value)?;
        }
        f.write_str("}")
    }
}

/// Reads the EXIF tags of `path`, or `None` if it carries no EXIF data.
pub fn read_tags(path: &Path) -> Result<Option<TagBlocks>> {
    log::trace!("Extracting EXIF data for image: {:?}", path);
    let file = File::open(path).map_err(|e| AppError::io(path, e))?;
    let mut buf_reader = BufReader::new(file);
    let exif = match Reader::new().read_from_container(&mut buf_reader) {
        Ok(exif) => exif,
        Err(exif::Error::Io(e)) if e.kind() != ErrorKind::UnexpectedEof => {
            return Err(AppError::io(path, e));
        }
        Err(e) => {
            log::debug!("No EXIF data found for {:?}: {}", path, e);
            return Ok(None);
        }
    };
    Ok(Some(TagBlocks::from_fields(exif.fields())))
}

impl TagBlocks {
    /// Keeps primary-image fields whose tag has a known name.
    pub fn from_fields<'a>(fields: impl IntoIterator<Item = &'a Field>) -> Self {
        let mut blocks = TagBlocks::default();
        for field in fields {
            if field.ifd_num != In::PRIMARY || POINTER_TAGS.contains(&field.tag) {
                continue;
            }
            if field.tag.description().is_none() {
                log::trace!("Skipping unknown tag {}", field.tag);
                continue;
            }

            let name = field.tag.to_string();
            let value = render_value(field);
            if field.tag.context() == Context::Gps {
                blocks.gps.insert(name, value);
            } else {
                blocks.exif.insert(name, value);
            }
        }
        blocks
    }
}

/// Text form of a field value, without unit conversion.
///
/// Strings are unquoted and rationals kept as `num/denom`, so coordinates
/// appear exactly as stored.
pub fn render_value(field: &Field) -> String {
    match &field.value {
        Value::Ascii(strings) => strings
            .iter()
            .map(|s| {
                let end = s.iter().rposition(|b| *b != 0).map_or(0, |i| i + 1);
                String::from_utf8_lossy(&s[..end]).into_owned()
            })
            .collect::<Vec<_>>()
            .join(", "),
        Value::Rational(values) => {
            let parts: Vec<String> = values
                .iter()
                .map(|r| format!("{}/{}", r.num, r.denom))
                .collect();
            if parts.len() == 1 {
                parts.join("")
            } else {
                format!("({})", parts.join(", "))
            }
        }
        _ => field.display_value().to_string(),
    }
}

/// Joins a raw coordinate with its hemisphere reference.
///
/// Both halves must be present, otherwise there is no coordinate to report.
pub fn compose_coordinate(value: Option<&str>, reference: Option<&str>) -> Option<String> {
    match (value, reference) {
        (Some(value), Some(reference)) => Some(format!("{}{}", value, reference)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exif::Rational;

    fn ascii(tag: Tag, text: &str) -> Field {
        Field {
            tag,
            ifd_num: In::PRIMARY,
            value: Value::Ascii(vec![text.as_bytes().to_vec()]),
        }
    }

    fn dms(tag: Tag, d: u32, m: u32, s: u32) -> Field {
        Field {
            tag,
            ifd_num: In::PRIMARY,
            value: Value::Rational(vec![
                Rational { num: d, denom: 1 },
                Rational { num: m, denom: 1 },
                Rational { num: s, denom: 100 },
            ]),
        }
    }

    #[test]
    fn compose_coordinate_needs_both_halves() {
        assert_eq!(
            compose_coordinate(Some("(37/1, 46/1, 2964/100)"), Some("N")),
            Some("(37/1, 46/1, 2964/100)N".to_string())
        );
        assert_eq!(compose_coordinate(Some("(1/1)"), None), None);
        assert_eq!(compose_coordinate(None, Some("W")), None);
        assert_eq!(compose_coordinate(None, None), None);
    }

    #[test]
    fn splits_gps_tags_into_their_own_block() {
        let fields = vec![
            ascii(Tag::Make, "Canon"),
            ascii(Tag::Model, "EOS 5D"),
            dms(Tag::GPSLatitude, 37, 46, 2964),
            ascii(Tag::GPSLatitudeRef, "N"),
            ascii(Tag::GPSDateStamp, "2018:07:27"),
        ];

        let blocks = TagBlocks::from_fields(&fields);
        assert_eq!(blocks.exif.get("Make"), Some("Canon"));
        assert_eq!(blocks.exif.get("Model"), Some("EOS 5D"));
        assert_eq!(blocks.exif.len(), 2);
        assert_eq!(blocks.gps.get("GPSLatitude"), Some("(37/1, 46/1, 2964/100)"));
        assert_eq!(blocks.gps.get("GPSLatitudeRef"), Some("N"));
        assert_eq!(blocks.gps.get("GPSDateStamp"), Some("2018:07:27"));
    }

    #[test]
    fn skips_thumbnail_pointer_and_unknown_tags() {
        let mut thumbnail = ascii(Tag::Make, "Thumb");
        thumbnail.ifd_num = In::THUMBNAIL;
        let fields = vec![
            thumbnail,
            Field {
                tag: Tag::GPSInfoIFDPointer,
                ifd_num: In::PRIMARY,
                value: Value::Long(vec![120]),
            },
            ascii(Tag(Context::Exif, 0xfeed), "mystery"),
        ];

        let blocks = TagBlocks::from_fields(&fields);
        assert!(blocks.exif.is_empty());
        assert!(blocks.gps.is_empty());
    }

    #[test]
    fn ascii_values_drop_trailing_nuls() {
        let field = Field {
            tag: Tag::Make,
            ifd_num: In::PRIMARY,
            value: Value::Ascii(vec![b"Nikon\0\0".to_vec()]),
        };
        assert_eq!(render_value(&field), "Nikon");
    }

    #[test]
    fn tag_map_display_lists_pairs_in_order() {
        let blocks = TagBlocks::from_fields(&[
            ascii(Tag::Make, "Canon"),
            ascii(Tag::Model, "EOS"),
        ]);
        assert_eq!(blocks.exif.to_string(), "{Make: Canon, Model: EOS}");
    }
}
