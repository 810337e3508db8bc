pub mod achievements;
pub mod assignments;
pub mod delivery;
pub mod error;
pub mod grading;
pub mod mock_data;
pub mod models;
pub mod notifications;
pub mod parent_links;
pub mod views;

use serde::{Deserialize, Serialize};

use crate::models::assignment::Assignment;
use crate::models::progress::{Achievement, Grade};
use crate::notifications::Notification;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum AppMode {
    #[default]
    Student,
    Parent,
}

/// The whole application state, constructed explicitly and passed to the
/// engine operations by reference. Nothing here is global.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct AppState {
    pub mode: AppMode,
    pub assignments: Vec<Assignment>,
    pub achievements: Vec<Achievement>,
    pub grades: Vec<Grade>,
    pub notifications: Vec<Notification>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            AppMode::Student => AppMode::Parent,
            AppMode::Parent => AppMode::Student,
        };
    }
}
