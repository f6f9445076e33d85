use std::{
    fs::File,
    io::{self, BufWriter, StdoutLock, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context;
use dropout_analytics::{AnalyticsConfig, StudentRecord};

#[derive(Debug)]
pub enum Output {
    Stdout {
        writer: StdoutLock<'static>,
    },
    File {
        writer: BufWriter<File>,
        path: PathBuf,
    },
}

impl Output {
    pub fn save_json<T>(value: &T, output_path: Option<PathBuf>) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        let mut output = Output::from_output_path(output_path)?;
        output.write_json(value)?;
        tracing::info!(output = %output.display_path(), "wrote JSON output");
        Ok(())
    }

    pub fn from_output_path(output_path: Option<PathBuf>) -> anyhow::Result<Self> {
        match output_path {
            Some(path) => Output::open(path),
            None => Ok(Output::stdout()),
        }
    }

    pub fn stdout() -> Self {
        Output::Stdout {
            writer: io::stdout().lock(),
        }
    }

    pub fn open(path: PathBuf) -> anyhow::Result<Self> {
        let file = File::create(&path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Output::File {
            writer: BufWriter::new(file),
            path,
        })
    }

    pub fn display_path(&self) -> String {
        match self {
            Output::Stdout { .. } => "stdout".to_string(),
            Output::File { path, .. } => path.display().to_string(),
        }
    }

    pub fn write_json<T>(&mut self, value: &T) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        serde_json::to_writer_pretty(&mut *self, value)
            .with_context(|| format!("Failed to write JSON to {}", self.display_path()))?;
        writeln!(&mut *self).with_context(|| {
            format!(
                "Failed to write newline after JSON to {}",
                self.display_path()
            )
        })?;
        self.flush()
            .with_context(|| format!("Failed to flush output to {}", self.display_path()))?;
        Ok(())
    }
}

impl io::Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout { writer } => writer.write(buf),
            Output::File { writer, .. } => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout { writer } => writer.flush(),
            Output::File { writer, .. } => writer.flush(),
        }
    }
}

pub fn read_json_file<T, P>(file_kind: &str, path: P) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open {} file: {}", file_kind, path.display()))?;

    let reader = io::BufReader::new(file);
    let value = serde_json::from_reader(reader).with_context(|| {
        format!(
            "Failed to parse {} JSON file: {}",
            file_kind,
            path.display()
        )
    })?;

    Ok(value)
}

/// Read an analytics configuration, or the defaults when no path is given
///
/// Fields missing from the file keep their default values.
pub fn read_config_file(path: Option<&Path>) -> anyhow::Result<AnalyticsConfig> {
    match path {
        Some(path) => read_json_file("config", path),
        None => Ok(AnalyticsConfig::default()),
    }
}

/// Supported record file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFormat {
    /// Comma-separated values with a header row naming the columns
    Csv,
    /// A JSON array of record objects
    Json,
}

impl RecordFormat {
    /// Detect the format from the file extension (case-insensitive)
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("csv") => Ok(RecordFormat::Csv),
            Some("json") => Ok(RecordFormat::Json),
            _ => anyhow::bail!(
                "Unsupported records file (expected .csv or .json): {}",
                path.display()
            ),
        }
    }
}

/// Read student records from a CSV or JSON file
///
/// # Errors
///
/// Returns error if the extension is not supported, the file cannot be
/// opened, or any row fails to deserialize
pub fn read_records_file<P>(path: P) -> anyhow::Result<Vec<StudentRecord>>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    match RecordFormat::from_path(path)? {
        RecordFormat::Json => read_json_file("records", path),
        RecordFormat::Csv => read_csv_records(path),
    }
}

fn read_csv_records(path: &Path) -> anyhow::Result<Vec<StudentRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("Failed to open records file: {}", path.display()))?;

    reader
        .deserialize::<StudentRecord>()
        .enumerate()
        .map(|(i, row)| {
            // header is line 1
            row.with_context(|| {
                format!(
                    "Failed to parse record on line {} of {}",
                    i + 2,
                    path.display()
                )
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use dropout_analytics::{Feature, Outcome};

    use super::*;

    const CSV_HEADER: &str = "student_id,gpa,attendance,semester,prev_gpa,failed_courses,\
        feedback_engagement,late_assignments,forum_participation,meeting_attendance,\
        study_group,days_active,clicks_per_week,assessments_submitted,previous_attempts,\
        studied_credits,dropout";

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            RecordFormat::from_path(Path::new("students.CSV")).unwrap(),
            RecordFormat::Csv
        );
        assert_eq!(
            RecordFormat::from_path(Path::new("a/b/students.json")).unwrap(),
            RecordFormat::Json
        );
        assert!(RecordFormat::from_path(Path::new("students.xlsx")).is_err());
        assert!(RecordFormat::from_path(Path::new("students")).is_err());
    }

    #[test]
    fn test_read_csv_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("students.csv");
        fs::write(
            &path,
            format!(
                "{CSV_HEADER}\n\
                 S001,2.0,60.0,3,2.4,1,0.5,12.5,4,70.0,1,40,55,8,0,60,1\n\
                 S002,3.5,90.0,5,3.4,0,0.9,2.0,12,95.0,1,80,120,10,0,90,0\n"
            ),
        )
        .unwrap();

        let records = read_records_file(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].student_id, "S001");
        assert_eq!(records[0].dropout, Outcome::Dropout);
        assert_eq!(records[1].count(Feature::ClicksPerWeek), Some(120));
        assert!((records[1].value(Feature::LateAssignments) - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_csv_bad_outcome_reports_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("students.csv");
        fs::write(
            &path,
            format!("{CSV_HEADER}\nS001,2.0,60.0,3,2.4,1,0.5,12.5,4,70.0,1,40,55,8,0,60,2\n"),
        )
        .unwrap();

        let err = read_records_file(&path).unwrap_err();
        assert!(format!("{err}").contains("line 2"), "{err:#}");
    }

    #[test]
    fn test_read_json_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("students.json");
        let records = vec![
            StudentRecord {
                student_id: "S1".to_owned(),
                gpa: 1.5,
                dropout: Outcome::Dropout,
                ..StudentRecord::default()
            },
            StudentRecord {
                student_id: "S2".to_owned(),
                gpa: 3.5,
                ..StudentRecord::default()
            },
        ];
        fs::write(&path, serde_json::to_string(&records).unwrap()).unwrap();

        assert_eq!(read_records_file(&path).unwrap(), records);
    }

    #[test]
    fn test_missing_config_uses_defaults() {
        assert_eq!(read_config_file(None).unwrap(), AnalyticsConfig::default());

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"histogram_bins": 5}"#).unwrap();
        let config = read_config_file(Some(path.as_path())).unwrap();
        assert_eq!(config.histogram_bins, 5);
        assert_eq!(config.group_key, Feature::Semester);
    }

    #[test]
    fn test_save_json_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        Output::save_json(&[1, 2, 3], Some(path.clone())).unwrap();
        let written: Vec<u32> = read_json_file("output", &path).unwrap();
        assert_eq!(written, vec![1, 2, 3]);
    }
}
