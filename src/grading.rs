use chrono::Utc;
use log::info;
use serde::{Deserialize, Serialize};

use crate::assignments::find_index;
use crate::error::{EngineError, Trigger};
use crate::models::assignment::{Assignment, AssignmentStatus};
use crate::models::progress::Grade;
use crate::notifications;
use crate::AppState;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TeacherOutcome {
    Reviewed,
    Resubmit,
}

/// Apply the external grading collaborator's decision. `Reviewed` closes the
/// assignment and may carry a 1-5 grade appended to the history; `Resubmit`
/// reopens it for the student. Validation happens before any mutation, so a
/// rejected call leaves the assignment untouched.
pub fn on_teacher_decision<'a>(
    state: &'a mut AppState,
    id: &str,
    outcome: TeacherOutcome,
    grade: Option<u8>,
) -> Result<&'a Assignment, EngineError> {
    let idx = find_index(state, id)?;
    let assignment = &mut state.assignments[idx];

    if assignment.status != AssignmentStatus::TeacherReview {
        return Err(EngineError::InvalidTransition {
            id: id.to_string(),
            from: assignment.status,
            trigger: Trigger::TeacherDecision,
        });
    }
    if let Some(value) = grade {
        if !(1..=5).contains(&value) {
            return Err(EngineError::InvalidGrade(value));
        }
    }

    let title = assignment.title.clone();
    let subject = assignment.subject;
    match outcome {
        TeacherOutcome::Reviewed => {
            assignment.status = AssignmentStatus::Reviewed;
            info!("assignment {id}: reviewed by teacher, grade {grade:?}");
            if let Some(value) = grade {
                let record = Grade {
                    id: format!("g{}", state.grades.len() + 1),
                    subject,
                    value,
                    date: Utc::now().date_naive(),
                    assignment_title: title.clone(),
                };
                state.grades.push(record);
            }
            notifications::push(state, Some(id), notifications::build_teacher_reviewed(&title, grade));
        }
        TeacherOutcome::Resubmit => {
            assignment.status = AssignmentStatus::Resubmit;
            info!("assignment {id}: returned by teacher for resubmission");
            notifications::push(state, Some(id), notifications::build_teacher_returned(&title));
        }
    }

    Ok(&state.assignments[idx])
}
