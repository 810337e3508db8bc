use chrono::Utc;
use log::info;

use crate::notifications;
use crate::AppState;

/// Share of correct answers required to earn an achievement.
pub const EARN_THRESHOLD: f64 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizOutcome {
    Earned,
    BelowThreshold,
    AlreadyEarned,
    NoMatchingTopic,
}

/// Record a completed quiz. The matching unearned achievement is earned once
/// the score reaches the threshold; an earned achievement is never touched
/// again, and a below-threshold run changes nothing.
pub fn record_quiz_result(
    state: &mut AppState,
    topic: &str,
    correct: u32,
    total: u32,
) -> QuizOutcome {
    let idx = state
        .achievements
        .iter()
        .position(|achievement| achievement.topic == topic && !achievement.is_earned());

    let Some(idx) = idx else {
        if state.achievements.iter().any(|a| a.topic == topic) {
            return QuizOutcome::AlreadyEarned;
        }
        return QuizOutcome::NoMatchingTopic;
    };

    if total == 0 || (correct as f64) / (total as f64) < EARN_THRESHOLD {
        return QuizOutcome::BelowThreshold;
    }

    let achievement = &mut state.achievements[idx];
    achievement.earned_at = Some(Utc::now());
    achievement.correct_answers = correct;
    info!("achievement earned for topic «{topic}»: {correct}/{total}");

    notifications::push(
        state,
        None,
        notifications::build_achievement_earned(topic, correct, total),
    );
    QuizOutcome::Earned
}
