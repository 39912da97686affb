//! Todo domain model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::record::{Record, RecordFields, RecordStore};

/// Progress of a todo. `Deleted` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TodoStatus {
    NotStarted,
    InProgress,
    Completed,
    Deleted,
}

impl TodoStatus {
    pub const ALL: [TodoStatus; 4] = [
        TodoStatus::NotStarted,
        TodoStatus::InProgress,
        TodoStatus::Completed,
        TodoStatus::Deleted,
    ];

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            TodoStatus::NotStarted => "未着手",
            TodoStatus::InProgress => "着手中",
            TodoStatus::Completed => "完了",
            TodoStatus::Deleted => "削除",
        }
    }
}

/// Editable fields of a todo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoFormData {
    pub title: String,
    pub content: String,
    pub due_date: Option<NaiveDate>,
    pub status: TodoStatus,
}

impl RecordFields for TodoFormData {
    type Status = TodoStatus;
    const ENTITY: &'static str = "todo";
    const DELETED: TodoStatus = TodoStatus::Deleted;

    fn status(&self) -> TodoStatus {
        self.status
    }

    fn set_status(&mut self, status: TodoStatus) {
        self.status = status;
    }
}

pub type Todo = Record<TodoFormData>;
pub type TodoStore = RecordStore<TodoFormData>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::DEFAULT_ACTOR;

    #[test]
    fn test_todo_serializes_flat() {
        let mut store = TodoStore::new();
        let todo = store.create(
            TodoFormData {
                title: "デプロイ作業".to_string(),
                content: String::new(),
                due_date: NaiveDate::from_ymd_opt(2025, 7, 1),
                status: TodoStatus::InProgress,
            },
            DEFAULT_ACTOR,
        );

        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["title"], "デプロイ作業");
        assert_eq!(json["dueDate"], "2025-07-01");
        assert_eq!(json["status"], "in_progress");
        assert_eq!(json["createdBy"], DEFAULT_ACTOR);

        let back: Todo = serde_json::from_value(json).unwrap();
        assert_eq!(back, todo);
    }

    #[test]
    fn test_deleted_status_label() {
        assert_eq!(TodoStatus::Deleted.label(), "削除");
        let form = TodoFormData {
            title: String::new(),
            content: String::new(),
            due_date: None,
            status: TodoStatus::Deleted,
        };
        assert!(form.is_deleted());
    }
}
