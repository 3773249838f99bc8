use std::sync::Arc;

use axum::{routing::get, Router};

use appointment_cell::router::appointment_routes;
use contact_cell::router::contact_routes;
use doctor_cell::router::doctor_routes;
use service_cell::router::service_routes;
use shared_database::ClinicDb;

pub fn create_router(state: Arc<ClinicDb>) -> Router {
    Router::new()
        .route("/", get(|| async { "Clinic API is running!" }))
        .nest("/api/appointments", appointment_routes(state.clone()))
        .nest("/api/doctors", doctor_routes(state.clone()))
        .nest("/api/services", service_routes(state.clone()))
        .nest("/api/contact", contact_routes(state))
}
