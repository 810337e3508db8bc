use std::fmt;

use thiserror::Error;

use crate::models::assignment::AssignmentStatus;

/// Actions that drive the assignment state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    SubmitPhoto,
    RequestParentReview,
    ParentApprove,
    ParentReturn,
    SendToTeacher,
    TeacherDecision,
}

impl Trigger {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trigger::SubmitPhoto => "submit_photo",
            Trigger::RequestParentReview => "request_parent_review",
            Trigger::ParentApprove => "parent_approve",
            Trigger::ParentReturn => "parent_return",
            Trigger::SendToTeacher => "send_to_teacher",
            Trigger::TeacherDecision => "teacher_decision",
        }
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// The requested trigger is not valid for the assignment's current
    /// status. The assignment is left untouched.
    #[error("{trigger} is not allowed while assignment {id} is {from}")]
    InvalidTransition {
        id: String,
        from: AssignmentStatus,
        trigger: Trigger,
    },

    #[error("assignment {0} not found")]
    NotFound(String),

    /// A delegated external step (teacher submission, link delivery) failed.
    /// Status is left unchanged; the caller may retry.
    #[error("external delivery failed: {0}")]
    ExternalFailure(String),

    #[error("grade value {0} is outside the 1-5 scale")]
    InvalidGrade(u8),
}
