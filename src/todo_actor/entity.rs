//! [`ActorEntity`] implementation for [`Todo`].
//!
//! Payloads arrive validated, so every hook is infallible.

use super::TodoError;
use crate::model::{Todo, TodoCreate, TodoId, TodoPatch};
use resource_framework::ActorEntity;

impl ActorEntity for Todo {
    type Id = TodoId;
    type Create = TodoCreate;
    type Update = TodoPatch;
    type Query = ();
    type QueryResult = ();
    type Context = ();
    type Error = TodoError;

    fn id(&self) -> TodoId {
        self.id
    }

    fn from_create_params(id: TodoId, params: TodoCreate) -> Result<Self, TodoError> {
        Ok(Self {
            id,
            name: params.name,
            description: params.description,
            priority: params.priority,
        })
    }

    /// Applies the present fields of the patch.
    ///
    /// # Fields Updated
    /// - `name`
    /// - `description`
    /// - `priority`
    fn on_update(&mut self, update: TodoPatch) -> Result<(), TodoError> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(priority) = update.priority {
            self.priority = priority;
        }
        Ok(())
    }

    fn query(_records: &[Self], _query: ()) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Priority, TodoDraft};

    fn todo() -> Todo {
        let create = TodoCreate::new("Clean house", "Kitchen first", Priority::High).unwrap();
        Todo::from_create_params(TodoId(4), create).unwrap()
    }

    #[test]
    fn merge_touches_only_present_fields() {
        let mut todo = todo();
        let patch: TodoDraft = serde_json::from_str(r#"{"priority": 3}"#).unwrap();
        todo.on_update(patch.into_patch().unwrap()).unwrap();

        assert_eq!(todo.priority, Priority::Low);
        assert_eq!(todo.name, "Clean house");
        assert_eq!(todo.description, "Kitchen first");
    }

    #[test]
    fn replace_overwrites_every_field_but_keeps_the_id() {
        let mut todo = todo();
        let create = TodoCreate::new("Sports", "Gym", Priority::Medium).unwrap();
        todo.on_replace(create).unwrap();

        assert_eq!(
            todo,
            Todo {
                id: TodoId(4),
                name: "Sports".into(),
                description: "Gym".into(),
                priority: Priority::Medium,
            }
        );
    }
}
