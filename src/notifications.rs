use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};

use crate::AppState;

/// In-app notification record, appended by lifecycle events and rendered by
/// the presentation layer.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Notification {
    pub id: String,
    #[serde(rename = "type")]
    pub notification_type: String,
    pub title: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignment_id: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<JsonValue>,
}

/// Body of a notification before it gets an id and timestamp.
#[derive(Debug, Clone)]
pub struct NotificationBody {
    pub notification_type: String,
    pub title: String,
    pub body: String,
    pub metadata: Option<JsonValue>,
}

pub(crate) fn push(state: &mut AppState, assignment_id: Option<&str>, body: NotificationBody) {
    let id = format!("n{}", state.notifications.len() + 1);
    state.notifications.push(Notification {
        id,
        notification_type: body.notification_type,
        title: body.title,
        body: body.body,
        assignment_id: assignment_id.map(str::to_string),
        created_at: Utc::now(),
        metadata: body.metadata,
    });
}

pub fn build_parent_review_requested(title: &str) -> NotificationBody {
    NotificationBody {
        notification_type: "parent_review_requested".to_string(),
        title: "Отправлено родителю".to_string(),
        body: format!("Задание «{title}» ждёт проверки родителя."),
        metadata: None,
    }
}

pub fn build_parent_approved(title: &str) -> NotificationBody {
    NotificationBody {
        notification_type: "parent_approved".to_string(),
        title: "Задание одобрено!".to_string(),
        body: format!("Родитель одобрил «{title}». Можно отправлять учителю."),
        metadata: None,
    }
}

pub fn build_parent_returned(title: &str) -> NotificationBody {
    NotificationBody {
        notification_type: "parent_returned".to_string(),
        title: "Возвращено на доработку".to_string(),
        body: format!("Родитель вернул «{title}». Внеси исправления и отправь снова."),
        metadata: None,
    }
}

pub fn build_sent_to_teacher(title: &str) -> NotificationBody {
    NotificationBody {
        notification_type: "sent_to_teacher".to_string(),
        title: "Отправлено учителю".to_string(),
        body: format!("Задание «{title}» на проверке у учителя. Ожидай результат!"),
        metadata: None,
    }
}

pub fn build_teacher_reviewed(title: &str, grade: Option<u8>) -> NotificationBody {
    NotificationBody {
        notification_type: "teacher_reviewed".to_string(),
        title: "Задание проверено".to_string(),
        body: format!("Учитель проверил «{title}»."),
        metadata: grade.map(|value| json!({ "grade": value })),
    }
}

pub fn build_teacher_returned(title: &str) -> NotificationBody {
    NotificationBody {
        notification_type: "teacher_returned".to_string(),
        title: "Пересдай задание".to_string(),
        body: format!("Учитель вернул «{title}» на доработку."),
        metadata: None,
    }
}

pub fn build_achievement_earned(topic: &str, correct: u32, total: u32) -> NotificationBody {
    NotificationBody {
        notification_type: "achievement_earned".to_string(),
        title: "Новое достижение!".to_string(),
        body: format!("Тема «{topic}» освоена."),
        metadata: Some(json!({ "correct": correct, "total": total })),
    }
}
