//! Wire shapes for the todo API.
//!
//! # Design
//! These mirror the server's schema but are defined independently so the
//! client never links against Axum. Integration tests catch schema drift.

use serde::{Deserialize, Serialize};

/// A persisted todo as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub completed: bool,
}

/// The editable fields of a todo, used both to create one and to replace one
/// wholesale on update. The id travels in the URL, never in this payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoCreate {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub completed: bool,
}

impl TodoCreate {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            completed: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}

impl From<Todo> for TodoCreate {
    fn from(todo: Todo) -> Self {
        Self {
            title: todo.title,
            description: todo.description,
            completed: todo.completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_accepts_null_description() {
        let todo: Todo =
            serde_json::from_str(r#"{"id":1,"title":"A","description":null,"completed":false}"#)
                .unwrap();
        assert_eq!(todo.description, None);
    }

    #[test]
    fn todo_accepts_missing_description() {
        let todo: Todo = serde_json::from_str(r#"{"id":7,"title":"A","completed":true}"#).unwrap();
        assert_eq!(todo.id, 7);
        assert!(todo.completed);
        assert_eq!(todo.description, None);
    }

    #[test]
    fn todo_create_omits_absent_description() {
        let json = serde_json::to_value(TodoCreate::new("Buy milk")).unwrap();
        assert_eq!(json, serde_json::json!({"title": "Buy milk", "completed": false}));
    }

    #[test]
    fn todo_create_has_no_id_field() {
        let json = serde_json::to_value(
            TodoCreate::new("Walk dog")
                .with_description("around the block")
                .completed(true),
        )
        .unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["description"], "around the block");
        assert_eq!(json["completed"], true);
    }

    #[test]
    fn todo_converts_into_its_editable_fields() {
        let todo = Todo {
            id: 3,
            title: "Read".to_string(),
            description: Some("chapter 2".to_string()),
            completed: false,
        };
        let fields = TodoCreate::from(todo);
        assert_eq!(fields, TodoCreate::new("Read").with_description("chapter 2"));
    }
}
