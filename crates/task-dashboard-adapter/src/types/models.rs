/*
[INPUT]:  User-entered task rows
[OUTPUT]: Task model serialized into request bodies
[POS]:    Data layer - core domain model
[UPDATE]: When task attributes change
*/

use serde::{Deserialize, Serialize};

pub const MIN_SCORE: u8 = 1;
pub const MAX_SCORE: u8 = 5;

/// A single work item submitted for prioritization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub title: String,
    pub urgency: u8,
    pub impact: u8,
    #[serde(default = "default_effort_hours")]
    pub effort_hours: f64,
}

fn default_effort_hours() -> f64 {
    1.0
}

impl Default for Task {
    fn default() -> Self {
        Self {
            title: String::new(),
            urgency: 3,
            impact: 3,
            effort_hours: default_effort_hours(),
        }
    }
}

impl Task {
    pub fn new(title: impl Into<String>, urgency: u8, impact: u8, effort_hours: f64) -> Self {
        Self {
            title: title.into(),
            urgency,
            impact,
            effort_hours,
        }
    }

    /// Tasks shown when the dashboard first opens.
    pub fn starter_list() -> Vec<Task> {
        vec![
            Task::new("Prepare report", 3, 4, 1.5),
            Task::new("Customer meeting", 5, 5, 3.0),
        ]
    }

    /// Range warnings for the intended value bounds.
    ///
    /// The server accepts whatever it is sent, so these never block a request.
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if self.title.trim().is_empty() {
            warnings.push("title is empty".to_string());
        }
        if !(MIN_SCORE..=MAX_SCORE).contains(&self.urgency) {
            warnings.push(format!(
                "urgency {} outside {MIN_SCORE}-{MAX_SCORE}",
                self.urgency
            ));
        }
        if !(MIN_SCORE..=MAX_SCORE).contains(&self.impact) {
            warnings.push(format!(
                "impact {} outside {MIN_SCORE}-{MAX_SCORE}",
                self.impact
            ));
        }
        if !(self.effort_hours > 0.0) {
            warnings.push(format!("effort {} must be above zero", self.effort_hours));
        }
        warnings
    }
}
