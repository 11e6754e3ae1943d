//! # CRUD Recipe
//!
//! Demo entry point: starts the [`ServiceSystem`] from the environment and walks the endpoints
//! the way a client would, logging every response.
//!
//! 1.  Reading [`Config`] and setting up tracing.
//! 2.  Listing the seeded todos and adding one.
//! 3.  Re-pricing a catalog item and reading the stats.
//! 4.  Classifying an iris flower.
//! 5.  Clearing the catalog.
//!
//! Run with `RUST_LOG=debug` to see every actor message.

use crud_recipe::api::{self, ApiResponse};
use crud_recipe::config::Config;
use crud_recipe::lifecycle::ServiceSystem;
use crud_recipe::model::ItemId;
use resource_framework::tracing::setup_tracing;
use tracing::{info, warn, Instrument};

fn log_response(route: &str, response: &ApiResponse) {
    if response.is_success() {
        info!(route, status = %response.status, body = %response.body, "Response");
    } else {
        warn!(route, status = %response.status, body = %response.body, "Response");
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = Config::from_env()?;
    info!(?config, "Starting application");

    let system = ServiceSystem::start(&config).await?;
    info!(model = %system.model_status(), "Services started");

    let span = tracing::info_span!("todos");
    async {
        let response = api::todos::get_many(&system.todo_client, Some("3")).await;
        log_response("GET /todos?first_n=3", &response);

        let body = br#"{"name": "Groceries", "description": "Milk and bread", "priority": 2}"#;
        let response = api::todos::create(&system.todo_client, body).await;
        log_response("POST /todos", &response);

        let response = api::todos::create(&system.todo_client, br#"{"name": "ab"}"#).await;
        log_response("POST /todos", &response);
    }
    .instrument(span)
    .await;

    let span = tracing::info_span!("catalog");
    async {
        let response = api::items::merge(&system.item_client, ItemId(1), br#"{"price": 55}"#).await;
        log_response("PATCH /items/1", &response);

        let response = api::items::search(&system.item_client, Some("an")).await;
        log_response("GET /search?name=an", &response);

        log_response("GET /total", &api::items::total(&system.item_client).await);
        log_response("GET /stats", &api::items::stats(&system.item_client).await);
    }
    .instrument(span)
    .await;

    let span = tracing::info_span!("prediction");
    async {
        log_response("GET /health", &api::predict::health(&system.inference).await);

        let body = br#"{"sepal_length": 4.9, "sepal_width": 3.0, "petal_length": 1.4, "petal_width": 0.2}"#;
        let response = api::predict::predict(&system.inference, body).await;
        log_response("POST /predict", &response);
    }
    .instrument(span)
    .await;

    log_response("DELETE /clear", &api::items::clear(&system.item_client).await);
    log_response("GET /items", &api::items::list(&system.item_client, None).await);

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
