//! The demo dataset the product ships with: assignments across every
//! lifecycle state, plus achievements and the grade history.

use chrono::{DateTime, NaiveDate, Utc};

use crate::models::assignment::{Assignment, AssignmentStatus, AssignmentVersion, Subject};
use crate::models::progress::{Achievement, Grade};
use crate::AppState;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid mock date")
}

fn datetime(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    date(y, m, d)
        .and_hms_opt(h, min, 0)
        .expect("valid mock time")
        .and_utc()
}

fn version(
    id: &str,
    photo_uri: &str,
    uploaded_at: DateTime<Utc>,
    parent_approved_at: Option<DateTime<Utc>>,
) -> AssignmentVersion {
    AssignmentVersion {
        id: id.to_string(),
        photo_uri: photo_uri.to_string(),
        uploaded_at,
        parent_approved: parent_approved_at.is_some(),
        parent_approved_at,
    }
}

pub fn seeded_state() -> AppState {
    let mut a1 = Assignment::new(
        "1",
        "Решение уравнений с одной переменной",
        "Решить уравнения №245-250 из учебника. Показать все шаги решения.",
        Subject::Math,
        date(2026, 2, 8),
        date(2026, 2, 12),
    );
    a1.status = AssignmentStatus::Resubmit;
    a1.versions.push(version(
        "v1",
        "https://picsum.photos/400/600?random=1",
        datetime(2026, 2, 9, 14, 30),
        Some(datetime(2026, 2, 9, 15, 0)),
    ));
    a1.has_photo = true;

    let a2 = Assignment::new(
        "2",
        "Приставки «при-» и «пре-»",
        "Упражнение 134. Вставить пропущенные буквы, объяснить выбор приставки.",
        Subject::Russian,
        date(2026, 2, 9),
        date(2026, 2, 13),
    );

    let mut a3 = Assignment::new(
        "3",
        "Площади треугольников",
        "Задачи на вычисление площади треугольника разными способами. №301-305.",
        Subject::Math,
        date(2026, 2, 7),
        date(2026, 2, 11),
    );
    a3.status = AssignmentStatus::InProgress;
    a3.versions.push(version(
        "v1",
        "https://picsum.photos/400/600?random=2",
        datetime(2026, 2, 10, 10, 0),
        None,
    ));
    a3.has_photo = true;

    let mut a4 = Assignment::new(
        "4",
        "Сложноподчинённые предложения",
        "Найти главное и придаточное предложения, определить вид связи.",
        Subject::Russian,
        date(2026, 2, 6),
        date(2026, 2, 10),
    );
    a4.status = AssignmentStatus::ParentReview;
    a4.versions.push(version(
        "v1",
        "https://picsum.photos/400/600?random=3",
        datetime(2026, 2, 8, 16, 0),
        None,
    ));
    a4.has_photo = true;
    let (link, _url) = crate::parent_links::issue(a4.versions.len());
    a4.parent_link = Some(link);

    let mut a5 = Assignment::new(
        "5",
        "Дроби и проценты",
        "Задачи на проценты из повседневной жизни. №178-183.",
        Subject::Math,
        date(2026, 2, 5),
        date(2026, 2, 9),
    );
    a5.status = AssignmentStatus::TeacherReview;
    a5.versions.push(version(
        "v1",
        "https://picsum.photos/400/600?random=4",
        datetime(2026, 2, 7, 11, 0),
        Some(datetime(2026, 2, 7, 12, 30)),
    ));
    a5.has_photo = true;

    let mut a6 = Assignment::new(
        "6",
        "Причастный оборот",
        "Упражнение 89. Расставить знаки препинания в предложениях с причастным оборотом.",
        Subject::Russian,
        date(2026, 2, 3),
        date(2026, 2, 7),
    );
    a6.status = AssignmentStatus::Reviewed;
    a6.versions.push(version(
        "v1",
        "https://picsum.photos/400/600?random=5",
        datetime(2026, 2, 5, 9, 0),
        Some(datetime(2026, 2, 5, 10, 0)),
    ));
    a6.has_photo = true;

    let mut a7 = Assignment::new(
        "7",
        "Системы линейных уравнений",
        "Решить системы уравнений методом подстановки. №267-272.",
        Subject::Math,
        date(2026, 2, 1),
        date(2026, 2, 5),
    );
    a7.status = AssignmentStatus::Reviewed;
    a7.versions.push(version(
        "v1",
        "https://picsum.photos/400/600?random=6",
        datetime(2026, 2, 3, 14, 0),
        Some(datetime(2026, 2, 3, 15, 0)),
    ));
    a7.has_photo = true;

    let achievements = vec![
        Achievement {
            id: "a1".to_string(),
            topic: "Причастный оборот".to_string(),
            subject: Subject::Russian,
            earned_at: Some(datetime(2026, 2, 6, 0, 0)),
            correct_answers: 4,
            total_questions: 5,
        },
        Achievement {
            id: "a2".to_string(),
            topic: "Системы линейных уравнений".to_string(),
            subject: Subject::Math,
            earned_at: Some(datetime(2026, 2, 4, 0, 0)),
            correct_answers: 4,
            total_questions: 4,
        },
        Achievement {
            id: "a3".to_string(),
            topic: "Решение уравнений".to_string(),
            subject: Subject::Math,
            earned_at: None,
            correct_answers: 0,
            total_questions: 4,
        },
        Achievement {
            id: "a4".to_string(),
            topic: "Приставки «при-» и «пре-»".to_string(),
            subject: Subject::Russian,
            earned_at: None,
            correct_answers: 0,
            total_questions: 5,
        },
    ];

    let grade = |id: &str, subject, value, y, m, d, title: &str| Grade {
        id: id.to_string(),
        subject,
        value,
        date: date(y, m, d),
        assignment_title: title.to_string(),
    };
    let grades = vec![
        grade("g1", Subject::Math, 5, 2026, 2, 4, "Системы линейных уравнений"),
        grade("g2", Subject::Russian, 4, 2026, 2, 5, "Причастный оборот"),
        grade("g3", Subject::Math, 3, 2026, 2, 8, "Решение уравнений"),
        grade("g4", Subject::Math, 4, 2026, 1, 28, "Дроби обыкновенные"),
        grade("g5", Subject::Russian, 5, 2026, 1, 30, "Деепричастный оборот"),
        grade("g6", Subject::Math, 5, 2026, 1, 25, "Площади фигур"),
        grade("g7", Subject::Russian, 3, 2026, 1, 22, "Сложное предложение"),
        grade("g8", Subject::Math, 4, 2026, 1, 20, "Пропорции"),
        grade("g9", Subject::Russian, 4, 2026, 1, 18, "Однородные члены"),
        grade("g10", Subject::Math, 5, 2026, 1, 15, "Степени"),
    ];

    AppState {
        mode: crate::AppMode::Student,
        assignments: vec![a1, a2, a3, a4, a5, a6, a7],
        achievements,
        grades,
        notifications: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_covers_every_view() {
        let state = seeded_state();
        assert_eq!(state.assignments.len(), 7);
        assert!(state
            .assignments
            .iter()
            .any(|a| a.status == AssignmentStatus::Resubmit));
        assert!(state
            .assignments
            .iter()
            .any(|a| a.status == AssignmentStatus::New));
        assert!(state
            .assignments
            .iter()
            .any(|a| a.status == AssignmentStatus::Reviewed));
    }

    #[test]
    fn seed_assignments_are_internally_consistent() {
        let state = seeded_state();
        for assignment in &state.assignments {
            assert_eq!(assignment.has_photo, !assignment.versions.is_empty());
            if assignment.parent_link.is_some() {
                assert_eq!(assignment.status, AssignmentStatus::ParentReview);
            }
        }
    }
}
