use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::assignment::{Assignment, AssignmentStatus, Subject};
use crate::AppState;

/// The three derived groupings of assignments. They partition the
/// collection: every status maps to exactly one view.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentView {
    NeedsAttention,
    Current,
    Past,
}

pub fn view_of(status: AssignmentStatus) -> AssignmentView {
    match status {
        AssignmentStatus::Resubmit => AssignmentView::NeedsAttention,
        AssignmentStatus::New
        | AssignmentStatus::InProgress
        | AssignmentStatus::ParentReview
        | AssignmentStatus::ParentApproved
        | AssignmentStatus::TeacherReview => AssignmentView::Current,
        AssignmentStatus::Reviewed => AssignmentView::Past,
    }
}

pub fn is_needs_attention(status: AssignmentStatus) -> bool {
    view_of(status) == AssignmentView::NeedsAttention
}

pub fn is_current(status: AssignmentStatus) -> bool {
    view_of(status) == AssignmentView::Current
}

pub fn is_past(status: AssignmentStatus) -> bool {
    view_of(status) == AssignmentView::Past
}

/// Assignments belonging to a view, in collection order.
pub fn list_by_view<'a>(state: &'a AppState, view: AssignmentView) -> Vec<&'a Assignment> {
    state
        .assignments
        .iter()
        .filter(|assignment| view_of(assignment.status) == view)
        .collect()
}

/// Same as [`list_by_view`] with an optional subject filter, as the past
/// screen offers.
pub fn list_by_view_for_subject<'a>(
    state: &'a AppState,
    view: AssignmentView,
    subject: Option<Subject>,
) -> Vec<&'a Assignment> {
    state
        .assignments
        .iter()
        .filter(|assignment| view_of(assignment.status) == view)
        .filter(|assignment| subject.map_or(true, |s| assignment.subject == s))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    Overdue,
    DueToday,
    DaysLeft(i64),
}

pub fn days_left(deadline: NaiveDate, today: NaiveDate) -> i64 {
    (deadline - today).num_days()
}

pub fn urgency(deadline: NaiveDate, today: NaiveDate) -> Urgency {
    match days_left(deadline, today) {
        d if d < 0 => Urgency::Overdue,
        0 => Urgency::DueToday,
        d => Urgency::DaysLeft(d),
    }
}
