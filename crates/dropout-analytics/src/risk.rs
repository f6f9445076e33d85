//! Rule-based dropout risk scores.
//!
//! Each record gets a score from 0 to 100 built from six capped components:
//!
//! | Component             | Points                                  |
//! |-----------------------|-----------------------------------------|
//! | GPA                   | `< 2.0`: 25, `< 2.5`: 18, `< 3.0`: 10, else 3 |
//! | Attendance            | `< 60`: 20, `< 75`: 15, `< 85`: 8, else 2   |
//! | Failed courses        | 7 per course, at most 20                |
//! | Late assignments (%)  | `> 30`: 15, `> 15`: 10, `> 5`: 5        |
//! | Feedback engagement   | `< 30`: 10, `< 50`: 6, `< 70`: 3        |
//! | Days active per week  | `< 3`: 10, `< 5`: 5, `< 6`: 2           |
//!
//! Scores map onto four [`RiskCategory`] levels at 25, 50 and 75.

use serde::Serialize;

use crate::record::{RecordSet, StudentRecord};

/// Highest possible score.
pub const MAX_RISK_SCORE: u32 = 100;

/// Risk level derived from a score.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    #[display("Low Risk")]
    Low,
    #[display("Moderate Risk")]
    Moderate,
    #[display("High Risk")]
    High,
    #[display("Extreme Risk")]
    Extreme,
}

impl RiskCategory {
    /// All categories, lowest first.
    pub const ALL: [Self; 4] = [Self::Low, Self::Moderate, Self::High, Self::Extreme];

    #[must_use]
    pub fn from_score(score: u32) -> Self {
        match score {
            75.. => Self::Extreme,
            50.. => Self::High,
            25.. => Self::Moderate,
            _ => Self::Low,
        }
    }
}

/// Computes the risk score of one record.
#[must_use]
pub fn risk_score(record: &StudentRecord) -> u32 {
    let gpa = match record.gpa {
        g if g < 2.0 => 25,
        g if g < 2.5 => 18,
        g if g < 3.0 => 10,
        _ => 3,
    };
    let attendance = match record.attendance {
        a if a < 60.0 => 20,
        a if a < 75.0 => 15,
        a if a < 85.0 => 8,
        _ => 2,
    };
    let failed = record.failed_courses.saturating_mul(7).min(20);
    let late = match record.late_assignments {
        l if l > 30.0 => 15,
        l if l > 15.0 => 10,
        l if l > 5.0 => 5,
        _ => 0,
    };
    let engagement = match record.feedback_engagement {
        e if e < 30.0 => 10,
        e if e < 50.0 => 6,
        e if e < 70.0 => 3,
        _ => 0,
    };
    let activity = match record.days_active {
        0..3 => 10,
        3..5 => 5,
        5 => 2,
        _ => 0,
    };
    (gpa + attendance + failed + late + engagement + activity).min(MAX_RISK_SCORE)
}

/// Records of one risk category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskGroup {
    pub category: RiskCategory,
    pub count: usize,
    /// Records in the group labelled dropout.
    pub dropouts: usize,
    /// Student identifiers, in record order.
    pub student_ids: Vec<String>,
}

/// Groups records by risk category.
///
/// Every category is present, lowest first, even when it holds no records.
#[must_use]
pub fn risk_groups(records: &RecordSet) -> Vec<RiskGroup> {
    let mut groups = RiskCategory::ALL.map(|category| RiskGroup {
        category,
        count: 0,
        dropouts: 0,
        student_ids: vec![],
    });
    for record in records.iter() {
        let category = RiskCategory::from_score(risk_score(record));
        let group = &mut groups[category as usize];
        group.count += 1;
        group.dropouts += usize::from(record.dropout.is_dropout());
        group.student_ids.push(record.student_id.clone());
    }
    groups.into()
}
