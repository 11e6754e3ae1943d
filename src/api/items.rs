//! Catalog endpoints.

use super::{decode, respond, ApiResponse};
use crate::clients::ItemClient;
use crate::model::{Item, ItemDraft, ItemId};
use crate::validation::parse_limit;
use resource_framework::ActorClient;
use serde::Serialize;
use tracing::instrument;

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub deleted: Item,
}

#[derive(Debug, Serialize)]
pub struct TotalResponse {
    pub total_price: f64,
}

#[derive(Debug, Serialize)]
pub struct ClearResponse {
    pub status: &'static str,
    pub removed: usize,
}

/// `POST /items`. Responds 201 with the stored item.
#[instrument(skip_all)]
pub async fn create(client: &ItemClient, body: &[u8]) -> ApiResponse {
    respond(async {
        let draft: ItemDraft = decode(body)?;
        let item = client.create_item(draft).await?;
        ApiResponse::created(item)
    }
    .await)
}

/// `GET /items?limit=N`. A missing or zero `limit` returns every item.
#[instrument(skip(client))]
pub async fn list(client: &ItemClient, limit: Option<&str>) -> ApiResponse {
    respond(async {
        let limit = parse_limit("limit", limit)?;
        let items = client.list(limit).await?;
        ApiResponse::ok(items)
    }
    .await)
}

/// `GET /items/{id}`
#[instrument(skip(client))]
pub async fn get_one(client: &ItemClient, id: ItemId) -> ApiResponse {
    respond(async {
        let item = client.get(id).await?;
        ApiResponse::ok(item)
    }
    .await)
}

/// `PUT /items/{id}`. Both `name` and `price` are required.
#[instrument(skip(client, body))]
pub async fn replace(client: &ItemClient, id: ItemId, body: &[u8]) -> ApiResponse {
    respond(async {
        let draft: ItemDraft = decode(body)?;
        let item = client.replace_item(id, draft).await?;
        ApiResponse::ok(item)
    }
    .await)
}

/// `PATCH /items/{id}`
#[instrument(skip(client, body))]
pub async fn merge(client: &ItemClient, id: ItemId, body: &[u8]) -> ApiResponse {
    respond(async {
        let draft: ItemDraft = decode(body)?;
        let item = client.merge_item(id, draft).await?;
        ApiResponse::ok(item)
    }
    .await)
}

/// `DELETE /items/{id}`. Responds `{"deleted": item}`.
#[instrument(skip(client))]
pub async fn delete(client: &ItemClient, id: ItemId) -> ApiResponse {
    respond(async {
        let deleted = client.delete(id).await?;
        ApiResponse::ok(DeletedResponse { deleted })
    }
    .await)
}

/// `GET /search?name=S`. Without `name` every item matches.
#[instrument(skip(client))]
pub async fn search(client: &ItemClient, name: Option<&str>) -> ApiResponse {
    respond(async {
        let items = client.search(name.unwrap_or_default()).await?;
        ApiResponse::ok(items)
    }
    .await)
}

/// `GET /total`
#[instrument(skip_all)]
pub async fn total(client: &ItemClient) -> ApiResponse {
    respond(async {
        let total_price = client.total().await?;
        ApiResponse::ok(TotalResponse { total_price })
    }
    .await)
}

/// `GET /stats`. The average price is rounded to two decimals.
#[instrument(skip_all)]
pub async fn stats(client: &ItemClient) -> ApiResponse {
    respond(async {
        let stats = client.stats().await?;
        ApiResponse::ok(stats)
    }
    .await)
}

/// `DELETE /clear`
#[instrument(skip_all)]
pub async fn clear(client: &ItemClient) -> ApiResponse {
    respond(async {
        let removed = client.clear().await?;
        ApiResponse::ok(ClearResponse {
            status: "all items deleted",
            removed,
        })
    }
    .await)
}
