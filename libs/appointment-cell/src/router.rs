use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};

use shared_database::ClinicDb;

use crate::handlers;

pub fn appointment_routes(state: Arc<ClinicDb>) -> Router {
    Router::new()
        .route("/", get(handlers::get_appointments))
        .route("/", post(handlers::book_appointment))
        .route("/availability/{doctor_id}", get(handlers::get_availability))
        .route("/doctor/{doctor_id}", get(handlers::get_doctor_appointments))
        .route("/{appointment_id}", get(handlers::get_appointment))
        .route("/{appointment_id}", put(handlers::update_appointment))
        .route("/{appointment_id}/cancel", put(handlers::cancel_appointment))
        .route(
            "/{appointment_id}/reschedule",
            put(handlers::reschedule_appointment),
        )
        .with_state(state)
}
