use chrono::NaiveDate;

use neuroom_engine::assignments::{
    parent_approve, parent_return, request_parent_review, send_to_teacher, submit_photo,
};
use neuroom_engine::delivery::SimulatedDelivery;
use neuroom_engine::error::EngineError;
use neuroom_engine::grading::{on_teacher_decision, TeacherOutcome};
use neuroom_engine::models::assignment::{Assignment, AssignmentStatus, Subject};
use neuroom_engine::views::{list_by_view, AssignmentView};
use neuroom_engine::{mock_data, parent_links, AppMode, AppState};

fn fresh_assignment(id: &str) -> AppState {
    let mut state = AppState::new();
    state.assignments.push(Assignment::new(
        id,
        "Решение уравнений с одной переменной",
        "Решить уравнения №245-250 из учебника.",
        Subject::Math,
        NaiveDate::from_ymd_opt(2026, 2, 8).unwrap(),
        NaiveDate::from_ymd_opt(2026, 2, 12).unwrap(),
    ));
    state
}

fn token_of(link: &str) -> &str {
    link.rsplit('/').next().unwrap()
}

#[test]
fn new_assignment_starts_empty() {
    let state = fresh_assignment("1");
    let assignment = &state.assignments[0];
    assert_eq!(assignment.status, AssignmentStatus::New);
    assert!(!assignment.has_photo);
    assert!(assignment.versions.is_empty());
}

#[test]
fn first_submission_flips_status_and_photo_flag_together() {
    let mut state = fresh_assignment("1");
    let assignment = submit_photo(&mut state, "1", "p1").unwrap();
    assert_eq!(assignment.status, AssignmentStatus::InProgress);
    assert!(assignment.has_photo);
    assert_eq!(assignment.versions.len(), 1);
    assert_eq!(assignment.versions[0].photo_uri, "p1");
    assert!(!assignment.versions[0].parent_approved);
}

#[test]
fn submissions_append_monotonically() {
    let mut state = fresh_assignment("1");
    for n in 1..=4 {
        submit_photo(&mut state, "1", &format!("p{n}")).unwrap();
        let versions = &state.assignments[0].versions;
        assert_eq!(versions.len(), n);
        // earlier entries are untouched
        for (i, v) in versions.iter().enumerate() {
            assert_eq!(v.photo_uri, format!("p{}", i + 1));
        }
    }
}

#[test]
fn parent_review_request_yields_a_link() {
    let mut state = fresh_assignment("1");
    submit_photo(&mut state, "1", "p1").unwrap();
    let request = request_parent_review(&mut state, "1").unwrap();
    assert!(!request.link.is_empty());
    let assignment = &state.assignments[0];
    assert_eq!(assignment.status, AssignmentStatus::ParentReview);
    let link = assignment.parent_link.as_ref().unwrap();
    assert!(!link.token_hash.is_empty());
    assert_eq!(link.version_count, 1);
}

#[test]
fn parent_review_request_on_new_is_rejected() {
    let mut state = fresh_assignment("1");
    let err = request_parent_review(&mut state, "1").unwrap_err();
    assert!(matches!(err, EngineError::InvalidTransition { .. }));
    assert_eq!(state.assignments[0].status, AssignmentStatus::New);
    assert!(state.assignments[0].parent_link.is_none());
}

#[test]
fn returned_work_resubmits_without_advancing() {
    let mut state = fresh_assignment("1");
    submit_photo(&mut state, "1", "p1").unwrap();
    request_parent_review(&mut state, "1").unwrap();

    let assignment = parent_return(&mut state, "1").unwrap();
    assert_eq!(assignment.status, AssignmentStatus::Resubmit);

    let assignment = submit_photo(&mut state, "1", "p2").unwrap();
    assert_eq!(assignment.status, AssignmentStatus::Resubmit);
    assert_eq!(assignment.versions.len(), 2);
    assert_eq!(assignment.versions[0].photo_uri, "p1");
    assert_eq!(assignment.versions[1].photo_uri, "p2");
}

#[tokio::test]
async fn approved_work_reaches_the_teacher() {
    let mut state = fresh_assignment("1");
    submit_photo(&mut state, "1", "p1").unwrap();
    request_parent_review(&mut state, "1").unwrap();

    let assignment = parent_approve(&mut state, "1").unwrap();
    assert_eq!(assignment.status, AssignmentStatus::ParentApproved);
    assert!(assignment.versions[0].parent_approved);
    assert!(assignment.versions[0].parent_approved_at.is_some());
    assert!(assignment.parent_link.is_none());

    let delivery = SimulatedDelivery::instant();
    let assignment = send_to_teacher(&mut state, "1", &delivery).await.unwrap();
    assert_eq!(assignment.status, AssignmentStatus::TeacherReview);
}

#[tokio::test]
async fn failed_delivery_keeps_the_assignment_retryable() {
    let mut state = fresh_assignment("1");
    submit_photo(&mut state, "1", "p1").unwrap();
    request_parent_review(&mut state, "1").unwrap();
    parent_approve(&mut state, "1").unwrap();

    let failing = SimulatedDelivery::failing();
    let err = send_to_teacher(&mut state, "1", &failing).await.unwrap_err();
    assert!(matches!(err, EngineError::ExternalFailure(_)));
    assert_eq!(state.assignments[0].status, AssignmentStatus::ParentApproved);

    // retry against a working channel succeeds
    let working = SimulatedDelivery::instant();
    let assignment = send_to_teacher(&mut state, "1", &working).await.unwrap();
    assert_eq!(assignment.status, AssignmentStatus::TeacherReview);
}

#[tokio::test]
async fn full_cycle_through_teacher_decision() {
    let mut state = fresh_assignment("1");
    submit_photo(&mut state, "1", "p1").unwrap();
    request_parent_review(&mut state, "1").unwrap();
    parent_approve(&mut state, "1").unwrap();
    let delivery = SimulatedDelivery::instant();
    send_to_teacher(&mut state, "1", &delivery).await.unwrap();

    let assignment =
        on_teacher_decision(&mut state, "1", TeacherOutcome::Reviewed, Some(5)).unwrap();
    assert_eq!(assignment.status, AssignmentStatus::Reviewed);
    assert_eq!(state.grades.len(), 1);
    assert_eq!(state.grades[0].value, 5);

    // reviewed assignments land in the past view only
    assert_eq!(list_by_view(&state, AssignmentView::Past).len(), 1);
    assert!(list_by_view(&state, AssignmentView::Current).is_empty());
    assert!(list_by_view(&state, AssignmentView::NeedsAttention).is_empty());
}

#[tokio::test]
async fn teacher_can_send_work_back_around_the_loop() {
    let mut state = fresh_assignment("1");
    submit_photo(&mut state, "1", "p1").unwrap();
    request_parent_review(&mut state, "1").unwrap();
    parent_approve(&mut state, "1").unwrap();
    let delivery = SimulatedDelivery::instant();
    send_to_teacher(&mut state, "1", &delivery).await.unwrap();

    let assignment =
        on_teacher_decision(&mut state, "1", TeacherOutcome::Resubmit, None).unwrap();
    assert_eq!(assignment.status, AssignmentStatus::Resubmit);

    // second pass: resubmit, re-review, approve, resend
    submit_photo(&mut state, "1", "p2").unwrap();
    request_parent_review(&mut state, "1").unwrap();
    parent_approve(&mut state, "1").unwrap();
    send_to_teacher(&mut state, "1", &delivery).await.unwrap();
    let assignment =
        on_teacher_decision(&mut state, "1", TeacherOutcome::Reviewed, Some(4)).unwrap();
    assert_eq!(assignment.status, AssignmentStatus::Reviewed);
    assert!(assignment.versions[1].parent_approved);
}

#[test]
fn regenerated_link_invalidates_the_old_one() {
    let mut state = fresh_assignment("1");
    submit_photo(&mut state, "1", "p1").unwrap();
    let first = request_parent_review(&mut state, "1").unwrap();
    assert_eq!(
        parent_links::resolve(&state, token_of(&first.link)).unwrap().id,
        "1"
    );

    parent_return(&mut state, "1").unwrap();
    submit_photo(&mut state, "1", "p2").unwrap();
    let second = request_parent_review(&mut state, "1").unwrap();
    assert_ne!(first.link, second.link);

    assert!(matches!(
        parent_links::resolve(&state, token_of(&first.link)),
        Err(EngineError::NotFound(_))
    ));
    assert_eq!(
        parent_links::resolve(&state, token_of(&second.link)).unwrap().id,
        "1"
    );
}

#[tokio::test]
async fn link_delivery_failure_surfaces_as_external_failure() {
    let mut state = fresh_assignment("1");
    submit_photo(&mut state, "1", "p1").unwrap();
    let request = request_parent_review(&mut state, "1").unwrap();

    let failing = SimulatedDelivery::failing();
    let err = parent_links::deliver(&failing, &request.link).await.unwrap_err();
    assert!(matches!(err, EngineError::ExternalFailure(_)));
    // the link itself stays valid for retry
    assert_eq!(state.assignments[0].status, AssignmentStatus::ParentReview);
    assert!(parent_links::resolve(&state, token_of(&request.link)).is_ok());
}

#[test]
fn lifecycle_events_leave_a_notification_trail() {
    let mut state = fresh_assignment("1");
    submit_photo(&mut state, "1", "p1").unwrap();
    request_parent_review(&mut state, "1").unwrap();
    parent_approve(&mut state, "1").unwrap();

    let kinds: Vec<&str> = state
        .notifications
        .iter()
        .map(|n| n.notification_type.as_str())
        .collect();
    assert_eq!(kinds, vec!["parent_review_requested", "parent_approved"]);
    assert!(state
        .notifications
        .iter()
        .all(|n| n.assignment_id.as_deref() == Some("1")));
}

#[test]
fn mode_toggles_between_student_and_parent() {
    let mut state = AppState::new();
    assert_eq!(state.mode, AppMode::Student);
    state.toggle_mode();
    assert_eq!(state.mode, AppMode::Parent);
    state.toggle_mode();
    assert_eq!(state.mode, AppMode::Student);
}

#[test]
fn seeded_dataset_partitions_cleanly() {
    let state = mock_data::seeded_state();
    let attention = list_by_view(&state, AssignmentView::NeedsAttention);
    let current = list_by_view(&state, AssignmentView::Current);
    let past = list_by_view(&state, AssignmentView::Past);

    assert_eq!(attention.len(), 1);
    assert_eq!(current.len(), 4);
    assert_eq!(past.len(), 2);
    assert_eq!(
        attention.len() + current.len() + past.len(),
        state.assignments.len()
    );
}
