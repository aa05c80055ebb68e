//! Payload types for the todo API. The wire format is JSON with camelCase
//! keys; fields the client does not model are kept verbatim in `extra` and
//! written back unchanged on serialization.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Server-assigned todo identifier.
pub type TodoId = u64;

/// A todo item as the server stores it.
///
/// Only `id` and `completed` carry meaning for this client; everything else
/// is passed through. `priority` is whatever string the server uses (it
/// currently emits HIGH, MEDIUM or LOW) and is not validated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Payload for creating a todo. The server assigns `id` and `createdDate`;
/// unset fields are omitted from the request body rather than sent as null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTodo {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NewTodo {
    pub fn new(title: impl Into<String>) -> Self {
        NewTodo {
            title: title.into(),
            completed: None,
            priority: None,
            extra: Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_payload_omits_unset_fields() {
        let body = serde_json::to_value(NewTodo::new("Buy milk")).unwrap();
        assert_eq!(body, json!({ "title": "Buy milk" }));
    }

    #[test]
    fn unknown_fields_survive_round_trip() {
        let raw = json!({
            "id": 3,
            "title": "Water plants",
            "completed": false,
            "createdDate": "2025-06-01T09:30:00",
            "priority": "HIGH",
            "tags": ["garden"]
        });

        let todo: Todo = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(todo.id, 3);
        assert_eq!(todo.priority.as_deref(), Some("HIGH"));
        assert_eq!(todo.extra["tags"], json!(["garden"]));
        assert_eq!(serde_json::to_value(&todo).unwrap(), raw);
    }

    #[test]
    fn minimal_todo_deserializes() {
        let todo: Todo =
            serde_json::from_value(json!({ "id": 1, "title": "Buy milk", "completed": false }))
                .unwrap();
        assert_eq!(todo.id, 1);
        assert!(todo.created_date.is_none());
        assert!(todo.extra.is_empty());
    }
}
