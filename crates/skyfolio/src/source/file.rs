//! File-backed record source
//!
//! Reads a batch from a JSON file shaped like an APOD `count` response.
//! Handy offline or when the demo key is rate limited.

use crate::error::{GalleryError, Result};
use crate::record::DailyRecord;

use super::traits::ApodSource;

use std::fs;
use std::path::PathBuf;

/// Serves records from a local JSON array
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ApodSource for JsonFileSource {
    fn name(&self) -> &'static str {
        "Local file"
    }

    /// Returns at most `count` records from the file, in file order
    fn fetch_batch(&self, count: usize) -> Result<Vec<DailyRecord>> {
        let content = fs::read_to_string(&self.path)?;
        let mut records: Vec<DailyRecord> = serde_json::from_str(&content)
            .map_err(|e| GalleryError::Parse(format!("{:?}: {}", self.path, e)))?;
        if count > 0 {
            records.truncate(count);
        }
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env::temp_dir;
    use std::sync::atomic::{AtomicU32, Ordering};

    static TEST_COUNTER: AtomicU32 = AtomicU32::new(0);

    fn temp_path(name: &str) -> PathBuf {
        let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        temp_dir().join(format!("skyfolio_source_{}_{}.json", id, name))
    }

    #[test]
    fn test_reads_and_truncates() {
        let path = temp_path("batch");
        fs::write(
            &path,
            r#"[
                {"url": "https://x/1", "title": "One", "media_type": "image"},
                {"url": "https://x/2", "title": "Two", "media_type": "video"},
                {"url": "https://x/3", "title": "Three", "media_type": "image"}
            ]"#,
        )
        .unwrap();

        let source = JsonFileSource::new(&path);
        let records = source.fetch_batch(2).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "One");
        assert_eq!(records[1].title, "Two");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let source = JsonFileSource::new(temp_path("missing"));
        assert!(matches!(source.fetch_batch(10), Err(GalleryError::Io(_))));
    }

    #[test]
    fn test_object_instead_of_array_is_parse_error() {
        let path = temp_path("object");
        fs::write(&path, r#"{"error": {"code": "OVER_RATE_LIMIT"}}"#).unwrap();

        let source = JsonFileSource::new(&path);
        assert!(matches!(source.fetch_batch(10), Err(GalleryError::Parse(_))));

        let _ = fs::remove_file(&path);
    }
}
