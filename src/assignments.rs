use chrono::{DateTime, Utc};
use log::{error, info, warn};

use crate::delivery::DeliveryService;
use crate::error::{EngineError, Trigger};
use crate::models::assignment::{Assignment, AssignmentStatus, AssignmentVersion};
use crate::notifications;
use crate::parent_links;
use crate::AppState;

/// Outcome of starting parent review. The URL carries the raw capability
/// token and is returned exactly once; only its hash stays in state.
#[derive(Debug, Clone)]
pub struct ParentReviewRequest {
    pub assignment_id: String,
    pub link: String,
    pub expires_at: DateTime<Utc>,
}

pub(crate) fn find_index(state: &AppState, id: &str) -> Result<usize, EngineError> {
    state
        .assignments
        .iter()
        .position(|assignment| assignment.id == id)
        .ok_or_else(|| EngineError::NotFound(id.to_string()))
}

pub fn get<'a>(state: &'a AppState, id: &str) -> Result<&'a Assignment, EngineError> {
    let idx = find_index(state, id)?;
    Ok(&state.assignments[idx])
}

fn invalid(id: &str, from: AssignmentStatus, trigger: Trigger) -> EngineError {
    warn!("assignment {id}: {trigger} rejected while {from}");
    EngineError::InvalidTransition {
        id: id.to_string(),
        from,
        trigger,
    }
}

/// Student submits a photo attempt. The first submission moves a new
/// assignment into progress; any later submission only appends history.
pub fn submit_photo<'a>(
    state: &'a mut AppState,
    id: &str,
    photo_uri: &str,
) -> Result<&'a Assignment, EngineError> {
    let idx = find_index(state, id)?;
    let assignment = &mut state.assignments[idx];

    match assignment.status {
        AssignmentStatus::New | AssignmentStatus::InProgress | AssignmentStatus::Resubmit => {}
        from => return Err(invalid(id, from, Trigger::SubmitPhoto)),
    }

    let version = AssignmentVersion {
        id: format!("v{}", assignment.versions.len() + 1),
        photo_uri: photo_uri.to_string(),
        uploaded_at: Utc::now(),
        parent_approved: false,
        parent_approved_at: None,
    };
    assignment.versions.push(version);
    assignment.has_photo = true;
    if assignment.status == AssignmentStatus::New {
        assignment.status = AssignmentStatus::InProgress;
    }
    info!(
        "assignment {id}: version v{} uploaded, status {}",
        assignment.versions.len(),
        assignment.status
    );

    Ok(&state.assignments[idx])
}

/// Student asks the parent to review the latest work. Requires at least one
/// submitted version; issues a fresh capability link on every entry.
pub fn request_parent_review(
    state: &mut AppState,
    id: &str,
) -> Result<ParentReviewRequest, EngineError> {
    let idx = find_index(state, id)?;
    let assignment = &mut state.assignments[idx];

    match assignment.status {
        AssignmentStatus::InProgress | AssignmentStatus::Resubmit => {}
        from => return Err(invalid(id, from, Trigger::RequestParentReview)),
    }
    if assignment.versions.is_empty() {
        return Err(invalid(id, assignment.status, Trigger::RequestParentReview));
    }

    let (link, url) = parent_links::issue(assignment.versions.len());
    let expires_at = link.expires_at;
    assignment.parent_link = Some(link);
    assignment.status = AssignmentStatus::ParentReview;
    info!("assignment {id}: parent review requested, link expires {expires_at}");

    let title = assignment.title.clone();
    notifications::push(state, Some(id), notifications::build_parent_review_requested(&title));

    Ok(ParentReviewRequest {
        assignment_id: id.to_string(),
        link: url,
        expires_at,
    })
}

/// Parent approves the submitted work. Stamps the latest version and retires
/// the review link.
pub fn parent_approve<'a>(state: &'a mut AppState, id: &str) -> Result<&'a Assignment, EngineError> {
    let idx = find_index(state, id)?;
    let assignment = &mut state.assignments[idx];

    if assignment.status != AssignmentStatus::ParentReview {
        return Err(invalid(id, assignment.status, Trigger::ParentApprove));
    }

    let now = Utc::now();
    if let Some(latest) = assignment.versions.last_mut() {
        latest.parent_approved = true;
        latest.parent_approved_at = Some(now);
    }
    assignment.status = AssignmentStatus::ParentApproved;
    assignment.parent_link = None;
    info!("assignment {id}: approved by parent at {now}");

    let title = assignment.title.clone();
    notifications::push(state, Some(id), notifications::build_parent_approved(&title));

    Ok(&state.assignments[idx])
}

/// Parent returns the work for rework.
pub fn parent_return<'a>(state: &'a mut AppState, id: &str) -> Result<&'a Assignment, EngineError> {
    let idx = find_index(state, id)?;
    let assignment = &mut state.assignments[idx];

    if assignment.status != AssignmentStatus::ParentReview {
        return Err(invalid(id, assignment.status, Trigger::ParentReturn));
    }

    assignment.status = AssignmentStatus::Resubmit;
    assignment.parent_link = None;
    info!("assignment {id}: returned by parent for rework");

    let title = assignment.title.clone();
    notifications::push(state, Some(id), notifications::build_parent_returned(&title));

    Ok(&state.assignments[idx])
}

/// Student sends approved work to the teacher. The status changes only after
/// the delivery collaborator confirms; on failure the assignment stays in
/// `ParentApproved` and the caller may retry.
pub async fn send_to_teacher<'a>(
    state: &'a mut AppState,
    id: &str,
    delivery: &dyn DeliveryService,
) -> Result<&'a Assignment, EngineError> {
    let idx = find_index(state, id)?;

    if state.assignments[idx].status != AssignmentStatus::ParentApproved {
        return Err(invalid(id, state.assignments[idx].status, Trigger::SendToTeacher));
    }

    if let Err(err) = delivery.submit_to_teacher(&state.assignments[idx]).await {
        error!("assignment {id}: teacher submission failed: {err}");
        return Err(EngineError::ExternalFailure(err.to_string()));
    }

    let assignment = &mut state.assignments[idx];
    assignment.status = AssignmentStatus::TeacherReview;
    info!("assignment {id}: handed to teacher for review");

    let title = assignment.title.clone();
    notifications::push(state, Some(id), notifications::build_sent_to_teacher(&title));

    Ok(&state.assignments[idx])
}
