use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Subject {
    Math,
    Russian,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentStatus {
    New,
    InProgress,
    ParentReview,
    ParentApproved,
    TeacherReview,
    Reviewed,
    Resubmit,
}

impl AssignmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssignmentStatus::New => "new",
            AssignmentStatus::InProgress => "in_progress",
            AssignmentStatus::ParentReview => "parent_review",
            AssignmentStatus::ParentApproved => "parent_approved",
            AssignmentStatus::TeacherReview => "teacher_review",
            AssignmentStatus::Reviewed => "reviewed",
            AssignmentStatus::Resubmit => "resubmit",
        }
    }
}

impl fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One submitted attempt at an assignment.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AssignmentVersion {
    pub id: String,
    pub photo_uri: String,
    pub uploaded_at: DateTime<Utc>,
    pub parent_approved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_approved_at: Option<DateTime<Utc>>,
}

/// Capability link for the parent review step. Only the SHA-256 hash of the
/// token is kept; the shareable URL is handed out once at issuance.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ParentLink {
    pub token_hash: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    /// Number of versions at issuance. The link is bound to exactly that
    /// version set and stops resolving once the count changes.
    pub version_count: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Assignment {
    pub id: String,
    pub title: String,
    pub description: String,
    pub subject: Subject,
    pub status: AssignmentStatus,
    pub created_at: NaiveDate,
    pub deadline: NaiveDate,
    pub versions: Vec<AssignmentVersion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_link: Option<ParentLink>,
    pub has_photo: bool,
}

impl Assignment {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        subject: Subject,
        created_at: NaiveDate,
        deadline: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            subject,
            status: AssignmentStatus::New,
            created_at,
            deadline,
            versions: Vec::new(),
            parent_link: None,
            has_photo: false,
        }
    }

    pub fn latest_version(&self) -> Option<&AssignmentVersion> {
        self.versions.last()
    }
}
