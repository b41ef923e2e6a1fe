use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// IFD0
const TAG_IMAGE_WIDTH: u16 = 0x0100;
const TAG_IMAGE_HEIGHT: u16 = 0x0101;
const TAG_MAKE: u16 = 0x010F;
const TAG_MODEL: u16 = 0x0110;
const TAG_SOFTWARE: u16 = 0x0131;
const TAG_MODIFY_DATE: u16 = 0x0132;

// Exif sub-IFD
const TAG_EXPOSURE_TIME: u16 = 0x829A;
const TAG_F_NUMBER: u16 = 0x829D;
const TAG_ISO: u16 = 0x8827;
const TAG_DATE_TIME_ORIGINAL: u16 = 0x9003;
const TAG_CREATE_DATE: u16 = 0x9004;
const TAG_FLASH: u16 = 0x9209;
const TAG_FOCAL_LENGTH: u16 = 0x920A;
const TAG_COLOR_SPACE: u16 = 0xA001;
const TAG_EXIF_IMAGE_WIDTH: u16 = 0xA002;
const TAG_EXIF_IMAGE_HEIGHT: u16 = 0xA003;
const TAG_WHITE_BALANCE: u16 = 0xA403;

/// Metadata extracted from one image.
///
/// Every member is optional: a field is shown only when the parser found it.
/// Tags without a dedicated member are kept in [`Metadata::tags`] as display
/// strings, so JSON output still carries everything the file declared.
///
/// JSON keys follow the EXIF tag names (`Make`, `FNumber`, `ISO`, ...), with
/// GPS as decimal `latitude` / `longitude`.
///
/// # Example
///
/// ```rust
/// use exif_lens::exif::Metadata;
///
/// let metadata: Metadata = serde_json::from_str(r#"{"Make": "Canon", "ISO": 800}"#).unwrap();
/// assert_eq!(metadata.make.as_deref(), Some("Canon"));
/// assert_eq!(metadata.iso, Some(800));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Metadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub make: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Capture time: DateTimeOriginal, falling back to CreateDate, then ModifyDate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_time: Option<String>,
    /// Seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exposure_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub f_number: Option<f64>,
    #[serde(rename = "ISO", skip_serializing_if = "Option::is_none")]
    pub iso: Option<u32>,
    /// Millimetres.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focal_length: Option<f64>,
    /// Signed decimal degrees, negative south of the equator.
    #[serde(rename = "latitude", skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    /// Signed decimal degrees, negative west of Greenwich.
    #[serde(rename = "longitude", skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_height: Option<u32>,
    /// Raw EXIF flash code; `0` means the flash did not fire.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flash: Option<u16>,
    /// Raw EXIF white balance code; `0` is auto.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub white_balance: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_space: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub software: Option<String>,
    /// Every other tag, keyed by tag name.
    #[serde(flatten)]
    pub tags: BTreeMap<String, String>,
}

/// A tag value reduced to what the report needs.
#[derive(Debug, Clone, PartialEq)]
pub enum TagValue {
    Text(String),
    Number(f64),
}

impl TagValue {
    fn as_text(&self) -> Option<String> {
        match self {
            Self::Text(s) => {
                let s = s.trim().trim_matches('"').trim();
                if s.is_empty() { None } else { Some(s.to_string()) }
            }
            Self::Number(n) => Some(n.to_string()),
        }
    }

    fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) if n.is_finite() => Some(*n),
            Self::Number(_) => None,
            Self::Text(s) => s.trim().parse().ok(),
        }
    }

    fn as_u32(&self) -> Option<u32> {
        let n = self.as_f64()?;
        if n >= 0.0 && n <= u32::MAX as f64 && n.fract() == 0.0 {
            Some(n as u32)
        } else {
            None
        }
    }

    fn as_u16(&self) -> Option<u16> {
        self.as_u32().and_then(|n| u16::try_from(n).ok())
    }
}

impl Metadata {
    /// Record one parsed tag.
    ///
    /// Recognized tag codes fill their typed member; a value that does not
    /// convert (wrong type, empty text) leaves the member unset. Anything else
    /// lands in `tags` under `name`.
    pub fn apply_tag(&mut self, code: u16, name: &str, value: &TagValue) {
        match code {
            TAG_MAKE => self.make = value.as_text(),
            TAG_MODEL => self.model = value.as_text(),
            TAG_SOFTWARE => self.software = value.as_text(),
            TAG_DATE_TIME_ORIGINAL => {
                if let Some(v) = value.as_text() {
                    self.date_time = Some(v);
                }
            }
            TAG_CREATE_DATE | TAG_MODIFY_DATE => {
                // Only a fallback; DateTimeOriginal wins whatever the entry order.
                let name = if code == TAG_CREATE_DATE { "CreateDate" } else { "ModifyDate" };
                if let Some(v) = value.as_text() {
                    self.tags.insert(name.to_string(), v);
                }
            }
            TAG_EXPOSURE_TIME => self.exposure_time = value.as_f64(),
            TAG_F_NUMBER => self.f_number = value.as_f64(),
            TAG_ISO => self.iso = value.as_u32(),
            TAG_FOCAL_LENGTH => self.focal_length = value.as_f64(),
            TAG_EXIF_IMAGE_WIDTH => self.image_width = value.as_u32(),
            TAG_EXIF_IMAGE_HEIGHT => self.image_height = value.as_u32(),
            TAG_IMAGE_WIDTH => {
                if self.image_width.is_none() {
                    self.image_width = value.as_u32();
                }
            }
            TAG_IMAGE_HEIGHT => {
                if self.image_height.is_none() {
                    self.image_height = value.as_u32();
                }
            }
            TAG_FLASH => self.flash = value.as_u16(),
            TAG_WHITE_BALANCE => self.white_balance = value.as_u16(),
            TAG_COLOR_SPACE => self.color_space = value.as_u16(),
            _ => {
                if let Some(v) = value.as_text() {
                    self.tags.insert(name.to_string(), v);
                }
            }
        }
    }

    /// Resolve fallbacks once all tags are in.
    pub fn finish(&mut self) {
        if self.date_time.is_none() {
            self.date_time = self
                .tags
                .get("CreateDate")
                .or_else(|| self.tags.get("ModifyDate"))
                .cloned();
        }
    }

    /// `true` when nothing at all was recorded.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
