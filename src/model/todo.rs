//! A todo list entry.
//!
//! # Resource Framework
//! [`Todo`] implements [`ActorEntity`](resource_framework::ActorEntity) (see
//! [`crate::todo_actor::entity`]), so it is stored and mutated by a
//! [`ResourceActor`](resource_framework::ResourceActor).
//!
//! Requests arrive as a [`TodoDraft`]. [`TodoDraft::into_create`] produces the [`TodoCreate`] used
//! by create and replace; [`TodoDraft::into_patch`] produces the [`TodoPatch`] used by merge.

use crate::validation::{text_length, Patch, ValidationError, Violation, Violations};
use resource_framework::SequentialId;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt::{self, Display};

pub const NAME_MIN_CHARS: usize = 3;
pub const NAME_MAX_CHARS: usize = 512;

/// Type-safe identifier for Todos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(pub u32);

impl From<u32> for TodoId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl SequentialId for TodoId {
    fn first() -> Self {
        TodoId(1)
    }

    fn successor(self) -> Self {
        TodoId(self.0 + 1)
    }
}

/// Urgency of a todo. Declaration order is the sort order: `High < Medium < Low`.
///
/// On the wire a priority is its numeric value (`HIGH=1`, `MEDIUM=2`, `LOW=3`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Priority {
    High = 1,
    Medium = 2,
    #[default]
    Low = 3,
}

impl Priority {
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn from_value(value: i64) -> Option<Self> {
        match value {
            1 => Some(Priority::High),
            2 => Some(Priority::Medium),
            3 => Some(Priority::Low),
            _ => None,
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Priority::High => "HIGH",
            Priority::Medium => "MEDIUM",
            Priority::Low => "LOW",
        };
        f.write_str(label)
    }
}

impl Serialize for Priority {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.value())
    }
}

impl From<Priority> for i64 {
    fn from(priority: Priority) -> Self {
        i64::from(priority.value())
    }
}

fn check_priority(value: i64) -> Result<Priority, Violation> {
    Priority::from_value(value).ok_or(Violation::InvalidChoice {
        allowed: "1 (HIGH), 2 (MEDIUM), 3 (LOW)",
    })
}

fn check_name(value: String) -> Result<String, Violation> {
    text_length(value, NAME_MIN_CHARS, NAME_MAX_CHARS)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Todo {
    pub id: TodoId,
    pub name: String,
    pub description: String,
    pub priority: Priority,
}

/// Raw todo payload as decoded from a request body. Nothing is checked yet.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TodoDraft {
    #[serde(default, alias = "todo_name")]
    pub name: Patch<String>,
    #[serde(default, alias = "todo_description")]
    pub description: Patch<String>,
    #[serde(default)]
    pub priority: Patch<i64>,
}

impl TodoDraft {
    /// Validates a full payload: `name` and `description` are required, `priority` defaults to LOW.
    pub fn into_create(self) -> Result<TodoCreate, ValidationError> {
        let mut violations = Violations::new();
        let name = violations.check("name", self.name.required().and_then(check_name));
        let description = violations.check("description", self.description.required());
        let priority = violations.check(
            "priority",
            self.priority
                .or(Priority::default().into())
                .and_then(check_priority),
        );

        match (name, description, priority) {
            (Some(name), Some(description), Some(priority)) if violations.is_empty() => {
                Ok(TodoCreate {
                    name,
                    description,
                    priority,
                })
            }
            _ => Err(violations.into_error()),
        }
    }

    /// Validates a partial payload: every present field is checked, omitted fields stay `None`.
    pub fn into_patch(self) -> Result<TodoPatch, ValidationError> {
        let mut violations = Violations::new();
        let name = violations.check(
            "name",
            self.name
                .optional()
                .and_then(|n| n.map(check_name).transpose()),
        );
        let description = violations.check("description", self.description.optional());
        let priority = violations.check(
            "priority",
            self.priority
                .optional()
                .and_then(|p| p.map(check_priority).transpose()),
        );

        match (name, description, priority) {
            (Some(name), Some(description), Some(priority)) if violations.is_empty() => {
                Ok(TodoPatch {
                    name,
                    description,
                    priority,
                })
            }
            _ => Err(violations.into_error()),
        }
    }
}

/// A validated full todo payload (create and replace).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoCreate {
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) priority: Priority,
}

impl TodoCreate {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        priority: Priority,
    ) -> Result<Self, ValidationError> {
        TodoDraft {
            name: Patch::Value(name.into()),
            description: Patch::Value(description.into()),
            priority: Patch::Value(priority.into()),
        }
        .into_create()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }
}

/// A validated partial todo payload (merge). `None` leaves the stored field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoPatch {
    pub(crate) name: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) priority: Option<Priority>,
}

impl TodoPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.priority.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(json: &str) -> TodoDraft {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn priority_orders_high_first() {
        assert!(Priority::High < Priority::Medium);
        assert!(Priority::Medium < Priority::Low);
        assert_eq!(Priority::default(), Priority::Low);
    }

    #[test]
    fn priority_serializes_as_its_number() {
        let todo = Todo {
            id: TodoId(7),
            name: "Read".into(),
            description: "Chapter 4".into(),
            priority: Priority::Medium,
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 7, "name": "Read", "description": "Chapter 4", "priority": 2})
        );
    }

    #[test]
    fn create_defaults_priority_to_low() {
        let create = draft(r#"{"name": "Shop", "description": "milk"}"#)
            .into_create()
            .unwrap();
        assert_eq!(create.priority(), Priority::Low);
    }

    #[test]
    fn create_accepts_prefixed_aliases() {
        let create = draft(r#"{"todo_name": "Shop", "todo_description": "milk", "priority": 1}"#)
            .into_create()
            .unwrap();
        assert_eq!(create.name(), "Shop");
        assert_eq!(create.description(), "milk");
        assert_eq!(create.priority(), Priority::High);
    }

    #[test]
    fn create_reports_every_offending_field() {
        let err = draft(r#"{"name": "ab", "priority": 9}"#)
            .into_create()
            .unwrap_err();

        let fields: Vec<_> = err.violations().iter().map(|v| v.field).collect();
        assert_eq!(fields, ["name", "description", "priority"]);
        assert_eq!(err.violations()[0].violation, Violation::TooShort { min: 3 });
        assert_eq!(err.violations()[1].violation, Violation::Missing);
    }

    #[test]
    fn create_rejects_explicit_null_priority() {
        let err = draft(r#"{"name": "Shop", "description": "milk", "priority": null}"#)
            .into_create()
            .unwrap_err();
        assert_eq!(err.violations()[0].violation, Violation::Null);
    }

    #[test]
    fn patch_validates_only_present_fields() {
        let patch = draft(r#"{"priority": 2}"#).into_patch().unwrap();
        assert_eq!(patch.priority, Some(Priority::Medium));
        assert!(patch.name.is_none() && patch.description.is_none());

        let err = draft(r#"{"name": "no"}"#).into_patch().unwrap_err();
        assert!(err.has("name"));
        assert!(draft("{}").into_patch().unwrap().is_empty());
    }

    #[test]
    fn name_length_bounds_are_inclusive() {
        assert!(TodoCreate::new("abc", "", Priority::Low).is_ok());
        assert!(TodoCreate::new("x".repeat(512), "", Priority::Low).is_ok());
        assert!(TodoCreate::new("x".repeat(513), "", Priority::Low).is_err());
    }
}
