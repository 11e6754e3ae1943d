//! # Todo Client
//!
//! Wraps a `ResourceClient<Todo>`. Drafts are validated here, before anything is sent to the
//! actor, so an invalid payload never reaches the store.
use crate::model::{Todo, TodoDraft, TodoId};
use crate::todo_actor::TodoError;
use async_trait::async_trait;
use resource_framework::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for interacting with the Todo actor.
#[derive(Clone)]
pub struct TodoClient {
    inner: ResourceClient<Todo>,
}

impl TodoClient {
    pub fn new(inner: ResourceClient<Todo>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Todo> for TodoClient {
    type Error = TodoError;

    fn inner(&self) -> &ResourceClient<Todo> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into()
    }
}

impl TodoClient {
    #[instrument(skip(self, draft))]
    pub async fn create_todo(&self, draft: TodoDraft) -> Result<Todo, TodoError> {
        debug!(?draft, "create_todo called");
        let params = draft.into_create()?;
        self.create(params).await
    }

    #[instrument(skip(self, draft))]
    pub async fn replace_todo(&self, id: TodoId, draft: TodoDraft) -> Result<Todo, TodoError> {
        debug!(?draft, "replace_todo called");
        let params = draft.into_create()?;
        self.replace(id, params).await
    }

    #[instrument(skip(self, draft))]
    pub async fn merge_todo(&self, id: TodoId, draft: TodoDraft) -> Result<Todo, TodoError> {
        debug!(?draft, "merge_todo called");
        let patch = draft.into_patch()?;
        self.merge(id, patch).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Priority, TodoCreate};
    use resource_framework::mock::{create_mock_client, expect_create, MockClient};

    fn sample(id: u32) -> Todo {
        Todo {
            id: TodoId(id),
            name: "Read".into(),
            description: "Chapter 4".into(),
            priority: Priority::Low,
        }
    }

    #[tokio::test]
    async fn test_create_todo_sends_validated_payload() {
        let (client, mut receiver) = create_mock_client::<Todo>(10);
        let todo_client = TodoClient::new(client);

        let draft: TodoDraft =
            serde_json::from_str(r#"{"todo_name": "Read", "todo_description": "Chapter 4"}"#)
                .unwrap();
        let create_task = tokio::spawn(async move { todo_client.create_todo(draft).await });

        let (params, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(
            params,
            TodoCreate::new("Read", "Chapter 4", Priority::Low).unwrap()
        );
        responder.send(Ok(sample(6))).unwrap();

        let created = create_task.await.unwrap().unwrap();
        assert_eq!(created.id, TodoId(6));
    }

    #[tokio::test]
    async fn test_invalid_draft_never_reaches_the_actor() {
        let mock = MockClient::<Todo>::new();
        let todo_client = TodoClient::new(mock.client());

        let result = todo_client.create_todo(TodoDraft::default()).await;

        match result {
            Err(TodoError::Validation(err)) => {
                assert!(err.has("name") && err.has("description"));
            }
            other => panic!("Expected validation error, got {other:?}"),
        }
        mock.verify();
    }

    #[tokio::test]
    async fn test_get_unknown_id_maps_to_not_found() {
        let mut mock = MockClient::<Todo>::new();
        mock.expect_get(TodoId(99)).return_ok(None);
        let todo_client = TodoClient::new(mock.client());

        let result = todo_client.get(TodoId(99)).await;

        assert_eq!(result, Err(TodoError::NotFound("99".into())));
        mock.verify();
    }

    #[tokio::test]
    async fn test_closed_actor_maps_to_communication_error() {
        let mut mock = MockClient::<Todo>::new();
        mock.expect_delete(TodoId(1))
            .return_err(FrameworkError::ActorClosed);
        let todo_client = TodoClient::new(mock.client());

        let result = todo_client.delete(TodoId(1)).await;

        assert!(matches!(result, Err(TodoError::ActorCommunicationError(_))));
    }
}
