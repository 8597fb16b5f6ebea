//! APOD record types
//!
//! One `DailyRecord` per astronomy picture (or video) of the day, shaped
//! after the JSON objects returned by the APOD API.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// MediaType
// =============================================================================

/// Kind of media a record points at
///
/// The API only documents `image` and `video`, but other values do show up
/// (e.g. `other` for interactive pages). Those are kept verbatim so they
/// survive a save/load round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MediaType {
    Image,
    Video,
    Other(String),
}

impl MediaType {
    /// Wire representation
    pub fn as_str(&self) -> &str {
        match self {
            MediaType::Image => "image",
            MediaType::Video => "video",
            MediaType::Other(s) => s,
        }
    }
}

impl Default for MediaType {
    fn default() -> Self {
        MediaType::Other(String::new())
    }
}

impl From<String> for MediaType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "image" => MediaType::Image,
            "video" => MediaType::Video,
            _ => MediaType::Other(s),
        }
    }
}

impl From<&str> for MediaType {
    fn from(s: &str) -> Self {
        MediaType::from(s.to_string())
    }
}

impl From<MediaType> for String {
    fn from(m: MediaType) -> Self {
        match m {
            MediaType::Image => "image".to_string(),
            MediaType::Video => "video".to_string(),
            MediaType::Other(s) => s,
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// DailyRecord
// =============================================================================

/// A single astronomy picture of the day
///
/// `url` doubles as the record's identifier: it is unique within a batch
/// and is the key of the favorites collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRecord {
    /// Media URL (image source or embeddable video), also the identifier
    #[serde(default)]
    pub url: String,
    /// Display title
    #[serde(default)]
    pub title: String,
    /// Free-text description
    #[serde(default)]
    pub explanation: String,
    /// Publication date as sent by the API (YYYY-MM-DD)
    #[serde(default)]
    pub date: String,
    /// Copyright holder, absent for public-domain images
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
    /// Media kind
    #[serde(default)]
    pub media_type: MediaType,
    /// Full-resolution link (images only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hdurl: Option<String>,
}

impl DailyRecord {
    /// Create a record with the required display fields
    pub fn new(
        url: impl Into<String>,
        title: impl Into<String>,
        media_type: impl Into<MediaType>,
    ) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            explanation: String::new(),
            date: String::new(),
            copyright: None,
            media_type: media_type.into(),
            hdurl: None,
        }
    }

    /// Identifier used as the favorites key
    pub fn id(&self) -> &str {
        &self.url
    }

    /// Set the explanation text
    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = explanation.into();
        self
    }

    /// Set the date
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    /// Set the copyright holder
    pub fn with_copyright(mut self, copyright: impl Into<String>) -> Self {
        self.copyright = Some(copyright.into());
        self
    }

    /// Set the full-resolution link
    pub fn with_hdurl(mut self, hdurl: impl Into<String>) -> Self {
        self.hdurl = Some(hdurl.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_type_known_values() {
        assert_eq!(MediaType::from("image"), MediaType::Image);
        assert_eq!(MediaType::from("video"), MediaType::Video);
    }

    #[test]
    fn test_media_type_unknown_preserved() {
        let m = MediaType::from("audio");
        assert_eq!(m, MediaType::Other("audio".to_string()));
        assert_eq!(m.as_str(), "audio");
        assert_eq!(String::from(m), "audio");
    }

    #[test]
    fn test_deserialize_api_object() {
        let json = r#"{
            "copyright": "Jane Doe",
            "date": "2024-03-01",
            "explanation": "A galaxy far away.",
            "hdurl": "https://apod.nasa.gov/apod/image/2403/galaxy.jpg",
            "media_type": "image",
            "service_version": "v1",
            "title": "Spiral Galaxy",
            "url": "https://apod.nasa.gov/apod/image/2403/galaxy_1024.jpg"
        }"#;
        let record: DailyRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.title, "Spiral Galaxy");
        assert_eq!(record.media_type, MediaType::Image);
        assert_eq!(record.copyright.as_deref(), Some("Jane Doe"));
        assert_eq!(
            record.hdurl.as_deref(),
            Some("https://apod.nasa.gov/apod/image/2403/galaxy.jpg")
        );
        assert_eq!(record.id(), "https://apod.nasa.gov/apod/image/2403/galaxy_1024.jpg");
    }

    #[test]
    fn test_deserialize_video_without_optional_fields() {
        let json = r#"{
            "date": "2024-03-02",
            "explanation": "Timelapse.",
            "media_type": "video",
            "title": "Aurora",
            "url": "https://www.youtube.com/embed/abc"
        }"#;
        let record: DailyRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.media_type, MediaType::Video);
        assert!(record.copyright.is_none());
        assert!(record.hdurl.is_none());
    }

    #[test]
    fn test_deserialize_missing_url_defaults_empty() {
        let json = r#"{"title": "Interactive", "media_type": "other"}"#;
        let record: DailyRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.url, "");
        assert_eq!(record.media_type, MediaType::Other("other".to_string()));
    }

    #[test]
    fn test_serialize_skips_absent_optionals() {
        let record = DailyRecord::new("https://x/1", "One", MediaType::Image);
        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("copyright"));
        assert!(!json.contains("hdurl"));
        assert!(json.contains(r#""media_type":"image""#));
    }

    #[test]
    fn test_builder() {
        let record = DailyRecord::new("https://x/1", "One", "image")
            .with_explanation("text")
            .with_date("2024-01-01")
            .with_copyright("Someone")
            .with_hdurl("https://x/1-hd");
        assert_eq!(record.explanation, "text");
        assert_eq!(record.date, "2024-01-01");
        assert_eq!(record.copyright.as_deref(), Some("Someone"));
        assert_eq!(record.hdurl.as_deref(), Some("https://x/1-hd"));
    }
}
