//! Todo list endpoints.

use super::{decode, respond, ApiResponse};
use crate::clients::TodoClient;
use crate::model::{TodoDraft, TodoId};
use crate::validation::parse_limit;
use resource_framework::ActorClient;
use tracing::instrument;

/// `POST /todos`. Responds 201 with the stored todo.
#[instrument(skip_all)]
pub async fn create(client: &TodoClient, body: &[u8]) -> ApiResponse {
    respond(async {
        let draft: TodoDraft = decode(body)?;
        let todo = client.create_todo(draft).await?;
        ApiResponse::created(todo)
    }
    .await)
}

/// `GET /todos/{id}`
#[instrument(skip(client))]
pub async fn get_one(client: &TodoClient, id: TodoId) -> ApiResponse {
    respond(async {
        let todo = client.get(id).await?;
        ApiResponse::ok(todo)
    }
    .await)
}

/// `GET /todos?first_n=N`. A missing or zero `first_n` returns every todo.
#[instrument(skip(client))]
pub async fn get_many(client: &TodoClient, first_n: Option<&str>) -> ApiResponse {
    respond(async {
        let limit = parse_limit("first_n", first_n)?;
        let todos = client.list(limit).await?;
        ApiResponse::ok(todos)
    }
    .await)
}

/// `PUT /todos/{id}`. The body must be a complete todo.
#[instrument(skip(client, body))]
pub async fn replace(client: &TodoClient, id: TodoId, body: &[u8]) -> ApiResponse {
    respond(async {
        let draft: TodoDraft = decode(body)?;
        let todo = client.replace_todo(id, draft).await?;
        ApiResponse::ok(todo)
    }
    .await)
}

/// `PATCH /todos/{id}`. Only the fields present in the body change.
#[instrument(skip(client, body))]
pub async fn merge(client: &TodoClient, id: TodoId, body: &[u8]) -> ApiResponse {
    respond(async {
        let draft: TodoDraft = decode(body)?;
        let todo = client.merge_todo(id, draft).await?;
        ApiResponse::ok(todo)
    }
    .await)
}

/// `DELETE /todos/{id}`. Responds with the removed todo.
#[instrument(skip(client))]
pub async fn delete(client: &TodoClient, id: TodoId) -> ApiResponse {
    respond(async {
        let todo = client.delete(id).await?;
        ApiResponse::ok(todo)
    }
    .await)
}
