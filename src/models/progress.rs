use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::assignment::Subject;

/// Topic mastery tracked per subject. Earned exactly once, by quiz
/// completion; never un-earned.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Achievement {
    pub id: String,
    pub topic: String,
    pub subject: Subject,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub earned_at: Option<DateTime<Utc>>,
    pub correct_answers: u32,
    pub total_questions: u32,
}

impl Achievement {
    pub fn is_earned(&self) -> bool {
        self.earned_at.is_some()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GradeCategory {
    Excellent,
    Good,
    Satisfactory,
    Unsatisfactory,
}

impl GradeCategory {
    pub fn from_value(value: u8) -> Self {
        match value {
            5 => GradeCategory::Excellent,
            4 => GradeCategory::Good,
            3 => GradeCategory::Satisfactory,
            _ => GradeCategory::Unsatisfactory,
        }
    }
}

/// Immutable historical grade record on the 1-5 scale. Append-only.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Grade {
    pub id: String,
    pub subject: Subject,
    pub value: u8,
    pub date: NaiveDate,
    pub assignment_title: String,
}

impl Grade {
    pub fn category(&self) -> GradeCategory {
        GradeCategory::from_value(self.value)
    }
}
