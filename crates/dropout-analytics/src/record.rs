//! Typed student records
//!
//! This module defines the record schema consumed by the engine. The schema is
//! fixed at ingestion: every record carries the same set of numeric fields and
//! exactly one binary outcome, so engine code never inspects field names at
//! runtime.
//!
//! # Data Structure
//!
//! ```text
//! RecordSet
//! └─ records: Vec<StudentRecord>
//!     ├─ student_id
//!     ├─ continuous features (gpa, attendance, ...)  f64
//!     ├─ discrete features (semester, failed_courses, ...)  u32
//!     └─ dropout: Outcome (0 or 1)
//! ```
//!
//! # Serialization
//!
//! Records deserialize from the upload column layout, either as CSV rows or as
//! JSON objects:
//!
//! ```json
//! {
//!   "student_id": "S0001",
//!   "gpa": 3.12,
//!   "attendance": 91.5,
//!   "semester": 3,
//!   "failed_courses": 0,
//!   "dropout": 0
//! }
//! ```
//!
//! Missing fields, wrongly typed values and outcome labels other than 0/1 are
//! rejected by the deserializer. Non-finite numbers are rejected by
//! [`RecordSet::new`].

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{AnalyticsError, InvalidOutcome, ParseFeatureError};

/// Whether a feature holds real numbers or integer counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureKind {
    Continuous,
    Discrete,
}

/// A numeric column of the student record schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    Gpa,
    Attendance,
    Semester,
    PrevGpa,
    FailedCourses,
    FeedbackEngagement,
    LateAssignments,
    ForumParticipation,
    MeetingAttendance,
    StudyGroup,
    DaysActive,
    ClicksPerWeek,
    AssessmentsSubmitted,
    PreviousAttempts,
    StudiedCredits,
}

impl Feature {
    /// Every feature, in column order.
    pub const ALL: [Feature; 15] = [
        Feature::Gpa,
        Feature::Attendance,
        Feature::Semester,
        Feature::PrevGpa,
        Feature::FailedCourses,
        Feature::FeedbackEngagement,
        Feature::LateAssignments,
        Feature::ForumParticipation,
        Feature::MeetingAttendance,
        Feature::StudyGroup,
        Feature::DaysActive,
        Feature::ClicksPerWeek,
        Feature::AssessmentsSubmitted,
        Feature::PreviousAttempts,
        Feature::StudiedCredits,
    ];

    /// Column identifier, as used in uploads and configuration files.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Feature::Gpa => "gpa",
            Feature::Attendance => "attendance",
            Feature::Semester => "semester",
            Feature::PrevGpa => "prev_gpa",
            Feature::FailedCourses => "failed_courses",
            Feature::FeedbackEngagement => "feedback_engagement",
            Feature::LateAssignments => "late_assignments",
            Feature::ForumParticipation => "forum_participation",
            Feature::MeetingAttendance => "meeting_attendance",
            Feature::StudyGroup => "study_group",
            Feature::DaysActive => "days_active",
            Feature::ClicksPerWeek => "clicks_per_week",
            Feature::AssessmentsSubmitted => "assessments_submitted",
            Feature::PreviousAttempts => "previous_attempts",
            Feature::StudiedCredits => "studied_credits",
        }
    }

    /// Human-readable name for reports.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Feature::Gpa => "GPA",
            Feature::Attendance => "Attendance",
            Feature::Semester => "Semester",
            Feature::PrevGpa => "Previous GPA",
            Feature::FailedCourses => "Failed Courses",
            Feature::FeedbackEngagement => "Feedback Engagement",
            Feature::LateAssignments => "Late Assignments",
            Feature::ForumParticipation => "Forum Participation",
            Feature::MeetingAttendance => "Meeting Attendance",
            Feature::StudyGroup => "Study Group",
            Feature::DaysActive => "Days Active",
            Feature::ClicksPerWeek => "Clicks per Week",
            Feature::AssessmentsSubmitted => "Assessments Submitted",
            Feature::PreviousAttempts => "Previous Attempts",
            Feature::StudiedCredits => "Studied Credits",
        }
    }

    #[must_use]
    pub const fn kind(self) -> FeatureKind {
        match self {
            Feature::Gpa
            | Feature::Attendance
            | Feature::PrevGpa
            | Feature::FeedbackEngagement
            | Feature::LateAssignments
            | Feature::MeetingAttendance => FeatureKind::Continuous,
            Feature::Semester
            | Feature::FailedCourses
            | Feature::ForumParticipation
            | Feature::StudyGroup
            | Feature::DaysActive
            | Feature::ClicksPerWeek
            | Feature::AssessmentsSubmitted
            | Feature::PreviousAttempts
            | Feature::StudiedCredits => FeatureKind::Discrete,
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.id(), f)
    }
}

impl FromStr for Feature {
    type Err = ParseFeatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Feature::ALL
            .into_iter()
            .find(|feature| feature.id() == s)
            .ok_or_else(|| ParseFeatureError { id: s.to_owned() })
    }
}

/// Binary outcome label of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Outcome {
    /// Label `0`.
    #[default]
    Retained,
    /// Label `1`.
    Dropout,
}

impl Outcome {
    #[must_use]
    pub const fn is_dropout(self) -> bool {
        matches!(self, Outcome::Dropout)
    }

    /// The label as a number, for correlation against features.
    #[must_use]
    pub fn as_f64(self) -> f64 {
        f64::from(u8::from(self))
    }
}

impl TryFrom<u8> for Outcome {
    type Error = InvalidOutcome;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Outcome::Retained),
            1 => Ok(Outcome::Dropout),
            _ => Err(InvalidOutcome { value }),
        }
    }
}

impl From<Outcome> for u8 {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Retained => 0,
            Outcome::Dropout => 1,
        }
    }
}

/// One student observation.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct StudentRecord {
    pub student_id: String,
    pub gpa: f64,
    pub attendance: f64,
    pub semester: u32,
    pub prev_gpa: f64,
    pub failed_courses: u32,
    pub feedback_engagement: f64,
    pub late_assignments: f64,
    pub forum_participation: u32,
    pub meeting_attendance: f64,
    pub study_group: u32,
    pub days_active: u32,
    pub clicks_per_week: u32,
    pub assessments_submitted: u32,
    pub previous_attempts: u32,
    pub studied_credits: u32,
    pub dropout: Outcome,
}

impl StudentRecord {
    /// Value of a feature as a real number.
    #[must_use]
    pub fn value(&self, feature: Feature) -> f64 {
        match feature {
            Feature::Gpa => self.gpa,
            Feature::Attendance => self.attendance,
            Feature::PrevGpa => self.prev_gpa,
            Feature::FeedbackEngagement => self.feedback_engagement,
            Feature::LateAssignments => self.late_assignments,
            Feature::MeetingAttendance => self.meeting_attendance,
            Feature::Semester => f64::from(self.semester),
            Feature::FailedCourses => f64::from(self.failed_courses),
            Feature::ForumParticipation => f64::from(self.forum_participation),
            Feature::StudyGroup => f64::from(self.study_group),
            Feature::DaysActive => f64::from(self.days_active),
            Feature::ClicksPerWeek => f64::from(self.clicks_per_week),
            Feature::AssessmentsSubmitted => f64::from(self.assessments_submitted),
            Feature::PreviousAttempts => f64::from(self.previous_attempts),
            Feature::StudiedCredits => f64::from(self.studied_credits),
        }
    }

    /// Value of a discrete feature.
    ///
    /// Returns `None` for continuous features.
    #[must_use]
    pub fn count(&self, feature: Feature) -> Option<u32> {
        let count = match feature {
            Feature::Semester => self.semester,
            Feature::FailedCourses => self.failed_courses,
            Feature::ForumParticipation => self.forum_participation,
            Feature::StudyGroup => self.study_group,
            Feature::DaysActive => self.days_active,
            Feature::ClicksPerWeek => self.clicks_per_week,
            Feature::AssessmentsSubmitted => self.assessments_submitted,
            Feature::PreviousAttempts => self.previous_attempts,
            Feature::StudiedCredits => self.studied_credits,
            Feature::Gpa
            | Feature::Attendance
            | Feature::PrevGpa
            | Feature::FeedbackEngagement
            | Feature::LateAssignments
            | Feature::MeetingAttendance => return None,
        };
        Some(count)
    }
}

/// A validated batch of student records.
///
/// Record order carries no meaning; every engine operation is invariant under
/// permutation of the records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordSet {
    records: Vec<StudentRecord>,
}

impl RecordSet {
    /// Validates and wraps records.
    ///
    /// Fails on the first record holding a NaN or infinite value.
    pub fn new(records: Vec<StudentRecord>) -> Result<Self, AnalyticsError> {
        for (row, record) in records.iter().enumerate() {
            let non_finite = Feature::ALL
                .into_iter()
                .filter(|feature| feature.kind() == FeatureKind::Continuous)
                .find(|&feature| !record.value(feature).is_finite());
            if let Some(feature) = non_finite {
                return Err(AnalyticsError::NonFiniteValue { row, feature });
            }
        }
        Ok(Self { records })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &StudentRecord> + '_ {
        self.records.iter()
    }

    /// Column of a feature, in record order.
    #[must_use]
    pub fn values(&self, feature: Feature) -> Vec<f64> {
        self.records.iter().map(|r| r.value(feature)).collect()
    }

    /// Outcome column as `0.0` / `1.0`, in record order.
    #[must_use]
    pub fn outcome_values(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.dropout.as_f64()).collect()
    }

    /// Splits the records by outcome label.
    #[must_use]
    pub fn partition(&self) -> OutcomePartition<'_> {
        let (dropout, retained): (Vec<_>, Vec<_>) =
            self.records.iter().partition(|r| r.dropout.is_dropout());
        OutcomePartition { retained, dropout }
    }
}

/// Records split by outcome label.
#[derive(Debug, Clone)]
pub struct OutcomePartition<'a> {
    /// Records labelled `0`.
    pub retained: Vec<&'a StudentRecord>,
    /// Records labelled `1`.
    pub dropout: Vec<&'a StudentRecord>,
}

impl OutcomePartition<'_> {
    /// Feature column of one partition.
    #[must_use]
    pub fn values(&self, outcome: Outcome, feature: Feature) -> Vec<f64> {
        let records = match outcome {
            Outcome::Retained => &self.retained,
            Outcome::Dropout => &self.dropout,
        };
        records.iter().map(|r| r.value(feature)).collect()
    }
}
