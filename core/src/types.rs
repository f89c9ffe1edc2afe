//! Domain DTOs for the todo API.
//!
//! # Design
//! Records are keyed by server-assigned integer ids. Id `0` is reserved for
//! the placeholder shown while a creation is in flight; such a record never
//! enters the canonical list and is carried as [`TodoSlot::Pending`] instead.

use serde::{Deserialize, Serialize};

pub type TodoId = i64;
pub type UserId = i64;

/// Id carried by the unsaved placeholder record.
pub const PLACEHOLDER_ID: TodoId = 0;

/// A single todo item returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: TodoId,
    pub user_id: UserId,
    pub title: String,
    pub completed: bool,
}

impl Todo {
    /// Builds the provisional record displayed until the server answers.
    pub fn placeholder(user_id: UserId, title: &str) -> Self {
        Self {
            id: PLACEHOLDER_ID,
            user_id,
            title: title.trim().to_string(),
            completed: false,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.id == PLACEHOLDER_ID
    }
}

/// Request payload for creating a new todo.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodo {
    pub user_id: UserId,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

/// Request payload for updating an existing todo. Only the fields present in
/// the JSON are applied; omitted fields remain unchanged on the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl From<&Todo> for UpdateTodo {
    fn from(todo: &Todo) -> Self {
        Self {
            user_id: Some(todo.user_id),
            title: Some(todo.title.clone()),
            completed: Some(todo.completed),
        }
    }
}

/// One entry of the rendered list: either a committed record or the single
/// reserved in-flight marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoSlot {
    Saved(Todo),
    Pending(Todo),
}

impl TodoSlot {
    pub fn todo(&self) -> &Todo {
        match self {
            TodoSlot::Saved(todo) | TodoSlot::Pending(todo) => todo,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, TodoSlot::Pending(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_has_reserved_id_and_trimmed_title() {
        let todo = Todo::placeholder(4, "  Buy milk ");
        assert_eq!(todo.id, PLACEHOLDER_ID);
        assert!(todo.is_placeholder());
        assert_eq!(todo.title, "Buy milk");
        assert!(!todo.completed);
    }

    #[test]
    fn todo_uses_camel_case_on_the_wire() {
        let todo: Todo =
            serde_json::from_str(r#"{"id":3,"userId":9,"title":"x","completed":true}"#).unwrap();
        assert_eq!(todo.user_id, 9);
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["userId"], 9);
        assert!(json.get("user_id").is_none());
    }

    #[test]
    fn update_from_todo_carries_every_field() {
        let todo = Todo {
            id: 1,
            user_id: 2,
            title: "t".to_string(),
            completed: true,
        };
        let update = UpdateTodo::from(&todo);
        assert_eq!(update.user_id, Some(2));
        assert_eq!(update.title.as_deref(), Some("t"));
        assert_eq!(update.completed, Some(true));
    }
}
