use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use dropout_analytics::compute_analytics;

use crate::{store::RecordStore, util};

#[derive(Debug, Clone, Args)]
pub(crate) struct AnalyzeArg {
    /// Path to the student records file (.csv or .json)
    pub records: PathBuf,

    /// Analytics configuration JSON file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output file path (defaults to stdout)
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub(crate) fn run(arg: &AnalyzeArg) -> anyhow::Result<()> {
    let config = util::read_config_file(arg.config.as_deref())?;
    let store = RecordStore::load(&arg.records)?;
    let result = compute_analytics(store.records(), &config)
        .with_context(|| format!("Failed to analyze {}", store.source().display()))?;
    util::Output::save_json(&result, arg.output.clone())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_analyze_writes_result_json() {
        let dir = tempfile::tempdir().unwrap();
        let records = dir.path().join("students.csv");
        fs::write(
            &records,
            "student_id,gpa,attendance,semester,prev_gpa,failed_courses,feedback_engagement,\
             late_assignments,forum_participation,meeting_attendance,study_group,days_active,\
             clicks_per_week,assessments_submitted,previous_attempts,studied_credits,dropout\n\
             S1,2.0,60.0,1,2.2,1,0.3,4.0,1,55.0,0,20,30,5,0,60,1\n\
             S2,3.5,90.0,1,3.4,0,0.9,0.0,9,95.0,1,90,140,10,0,90,0\n\
             S3,1.5,50.0,2,1.9,2,0.1,7.0,0,40.0,0,10,12,3,1,30,1\n",
        )
        .unwrap();
        let output = dir.path().join("analytics.json");

        run(&AnalyzeArg {
            records,
            config: None,
            output: Some(output.clone()),
        })
        .unwrap();

        let json: serde_json::Value = util::read_json_file("analytics", &output).unwrap();
        assert_eq!(json["total_students"], 3);
        assert_eq!(json["dropout_rate"], "66.7");
        assert_eq!(json["groups"]["groups"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_analyze_rejects_empty_records() {
        let dir = tempfile::tempdir().unwrap();
        let records = dir.path().join("students.json");
        fs::write(&records, "[]").unwrap();

        let err = run(&AnalyzeArg {
            records,
            config: None,
            output: Some(dir.path().join("analytics.json")),
        })
        .unwrap_err();
        assert!(format!("{err:#}").contains("record set is empty"), "{err:#}");
    }
}
