//! Loaded record set and where it came from
//!
//! A [`RecordStore`] is created once per command invocation. Queries borrow
//! the validated records from it; nothing outlives the process.

use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{DateTime, Utc};
use dropout_analytics::RecordSet;

use crate::util;

#[derive(Debug, Clone)]
pub struct RecordStore {
    source: PathBuf,
    loaded_at: DateTime<Utc>,
    records: RecordSet,
}

impl RecordStore {
    /// Read and validate the records in `path`
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or parsed, or if a record
    /// holds a non-finite value
    pub fn load<P>(path: P) -> anyhow::Result<Self>
    where
        P: AsRef<Path>,
    {
        let source = path.as_ref().to_path_buf();
        let records = util::read_records_file(&source)?;
        let records = RecordSet::new(records)
            .with_context(|| format!("Invalid records in {}", source.display()))?;
        let loaded_at = Utc::now();
        tracing::info!(
            source = %source.display(),
            records = records.len(),
            %loaded_at,
            "loaded records"
        );
        Ok(Self {
            source,
            loaded_at,
            records,
        })
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn records(&self) -> &RecordSet {
        &self.records
    }

    /// One-line description for report headers
    pub fn describe_source(&self) -> String {
        format!(
            "{} ({} records, loaded {})",
            self.source().display(),
            self.records.len(),
            self.loaded_at().format("%Y-%m-%d %H:%M:%S UTC")
        )
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_load_json_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("students.json");
        fs::write(
            &path,
            r#"[{"student_id":"S1","gpa":2.0,"attendance":60.0,"semester":1,"prev_gpa":2.1,
                "failed_courses":1,"feedback_engagement":0.4,"late_assignments":3.0,
                "forum_participation":2,"meeting_attendance":50.0,"study_group":0,
                "days_active":20,"clicks_per_week":30,"assessments_submitted":5,
                "previous_attempts":0,"studied_credits":60,"dropout":1}]"#,
        )
        .unwrap();

        let before = Utc::now();
        let store = RecordStore::load(&path).unwrap();
        assert_eq!(store.records().len(), 1);
        assert_eq!(store.source(), path.as_path());
        assert!(store.loaded_at() >= before);
        assert!(store.describe_source().contains("1 records"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = RecordStore::load(dir.path().join("missing.csv")).unwrap_err();
        assert!(format!("{err}").contains("missing.csv"), "{err:#}");
    }
}
