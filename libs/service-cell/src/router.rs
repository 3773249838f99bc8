use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use shared_database::ClinicDb;

use crate::handlers;

pub fn service_routes(state: Arc<ClinicDb>) -> Router {
    Router::new()
        .route("/", get(handlers::list_services))
        .route("/", post(handlers::create_service))
        .route("/categories", get(handlers::get_categories))
        .route("/{service_id}", get(handlers::get_service))
        .route("/{service_id}", put(handlers::update_service))
        .route("/{service_id}", delete(handlers::delete_service))
        .with_state(state)
}
