/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - request bodies
[UPDATE]: When API schema changes
*/

use std::borrow::Cow;

use serde::Serialize;

use super::models::Task;

/// Body shared by `/suggest` and `/auto`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TasksPayload<'a> {
    pub tasks: Cow<'a, [Task]>,
}

impl<'a> TasksPayload<'a> {
    pub fn borrowed(tasks: &'a [Task]) -> Self {
        Self {
            tasks: Cow::Borrowed(tasks),
        }
    }
}
