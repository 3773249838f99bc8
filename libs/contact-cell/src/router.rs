use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};

use shared_database::ClinicDb;

use crate::handlers;

pub fn contact_routes(state: Arc<ClinicDb>) -> Router {
    Router::new()
        .route("/", post(handlers::submit_contact))
        .route("/", get(handlers::list_contacts))
        .route("/{contact_id}", get(handlers::get_contact))
        .route("/{contact_id}", put(handlers::update_contact))
        .route("/{contact_id}/respond", put(handlers::respond_contact))
        .with_state(state)
}
