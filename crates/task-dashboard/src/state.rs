/*
[INPUT]:  Actions from the UI and from completed requests
[OUTPUT]: Next DashboardState produced by reduce()
[POS]:    State layer - single update function for all view state
[UPDATE]: When adding actions or state fields
*/

use task_dashboard_adapter::{ApiOutcome, RequestKind, RequestMode, Task};

/// Complete view state. Only `reduce` produces new values.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    pub tasks: Vec<Task>,
    pub mode: RequestMode,
    pub loading: bool,
    pub in_flight: Option<RequestKind>,
    pub error: Option<String>,
    pub result: Option<ApiOutcome>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::with_tasks(Task::starter_list(), RequestMode::default())
    }
}

impl DashboardState {
    pub fn with_tasks(tasks: Vec<Task>, mode: RequestMode) -> Self {
        Self {
            tasks,
            mode,
            loading: false,
            in_flight: None,
            error: None,
            result: None,
        }
    }

    /// Suggest/Automate triggers are disabled while a request is pending.
    pub fn can_request(&self) -> bool {
        !self.loading
    }

    pub fn result_text(&self) -> Option<String> {
        self.result.as_ref().map(ApiOutcome::display_text)
    }
}

/// Editable task attribute, used to address a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Title,
    Urgency,
    Impact,
    EffortHours,
}

impl FieldKind {
    pub const ALL: [FieldKind; 4] = [
        FieldKind::Title,
        FieldKind::Urgency,
        FieldKind::Impact,
        FieldKind::EffortHours,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FieldKind::Title => "Title",
            FieldKind::Urgency => "Urgency",
            FieldKind::Impact => "Impact",
            FieldKind::EffortHours => "Effort (h)",
        }
    }

    /// Current value of this field rendered for editing.
    pub fn read(self, task: &Task) -> String {
        match self {
            FieldKind::Title => task.title.clone(),
            FieldKind::Urgency => task.urgency.to_string(),
            FieldKind::Impact => task.impact.to_string(),
            FieldKind::EffortHours => task.effort_hours.to_string(),
        }
    }

    /// Parse user input into a field update.
    pub fn parse(self, raw: &str) -> Result<TaskField, String> {
        match self {
            FieldKind::Title => Ok(TaskField::Title(raw.to_string())),
            FieldKind::Urgency => parse_score(raw, "urgency").map(TaskField::Urgency),
            FieldKind::Impact => parse_score(raw, "impact").map(TaskField::Impact),
            FieldKind::EffortHours => raw
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|hours| hours.is_finite())
                .map(TaskField::EffortHours)
                .ok_or_else(|| format!("effort must be a number of hours, got '{}'", raw.trim())),
        }
    }
}

fn parse_score(raw: &str, name: &str) -> Result<u8, String> {
    raw.trim()
        .parse::<u8>()
        .map_err(|_| format!("{name} must be a whole number, got '{}'", raw.trim()))
}

/// A single field replacement for one task.
#[derive(Debug, Clone, PartialEq)]
pub enum TaskField {
    Title(String),
    Urgency(u8),
    Impact(u8),
    EffortHours(f64),
}

impl TaskField {
    fn apply(self, task: &mut Task) {
        match self {
            TaskField::Title(title) => task.title = title,
            TaskField::Urgency(urgency) => task.urgency = urgency,
            TaskField::Impact(impact) => task.impact = impact,
            TaskField::EffortHours(hours) => task.effort_hours = hours,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    AddTask,
    UpdateTask { index: usize, field: TaskField },
    RemoveTask(usize),
    SetMode(RequestMode),
    RequestStarted(RequestKind),
    RequestSucceeded(ApiOutcome),
    RequestFailed(String),
}

/// Apply one action to the state.
pub fn reduce(mut state: DashboardState, action: Action) -> DashboardState {
    match action {
        Action::AddTask => {
            state.tasks.push(Task::default());
        }
        Action::UpdateTask { index, field } => {
            // Rows are only addressable once rendered; a stale index is ignored.
            if let Some(task) = state.tasks.get_mut(index) {
                field.apply(task);
            }
        }
        Action::RemoveTask(index) => {
            if index < state.tasks.len() {
                state.tasks.remove(index);
            }
        }
        Action::SetMode(mode) => {
            state.mode = mode;
        }
        Action::RequestStarted(kind) => {
            if state.loading {
                return state;
            }
            state.loading = true;
            state.in_flight = Some(kind);
            state.error = None;
            state.result = None;
        }
        Action::RequestSucceeded(outcome) => {
            state.loading = false;
            state.in_flight = None;
            state.result = Some(outcome);
        }
        Action::RequestFailed(message) => {
            state.loading = false;
            state.in_flight = None;
            state.error = Some(message);
        }
    }
    state
}
