use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use shared_database::ClinicDb;
use shared_models::error::AppError;
use shared_models::hhmm;

use crate::models::{
    AppointmentError, AppointmentListQuery, AvailabilityQuery, AvailabilityResponse,
    BookAppointmentRequest, CancelAppointmentRequest, DoctorAppointmentsQuery,
    RescheduleAppointmentRequest, UpdateAppointmentRequest,
};
use crate::services::availability::AvailabilityService;
use crate::services::booking::BookingService;

#[axum::debug_handler]
pub async fn book_appointment(
    State(db): State<Arc<ClinicDb>>,
    Json(request): Json<BookAppointmentRequest>,
) -> Result<Json<Value>, AppError> {
    let booking = BookingService::new(db);
    let appointment = booking.book(request).await.map_err(into_app_error)?;

    Ok(Json(json!({
        "success": true,
        "message": "Appointment booked successfully",
        "appointment": appointment
    })))
}

#[axum::debug_handler]
pub async fn get_appointments(
    State(db): State<Arc<ClinicDb>>,
    Query(query): Query<AppointmentListQuery>,
) -> Result<Json<Value>, AppError> {
    let booking = BookingService::new(db);
    let page = booking.list(query).await;

    Ok(Json(json!({
        "success": true,
        "count": page.appointments.len(),
        "total": page.total,
        "total_pages": page.total_pages,
        "current_page": page.current_page,
        "appointments": page.appointments
    })))
}

#[axum::debug_handler]
pub async fn get_appointment(
    State(db): State<Arc<ClinicDb>>,
    Path(appointment_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let booking = BookingService::new(db);
    let appointment = booking.get(appointment_id).await.map_err(into_app_error)?;

    Ok(Json(json!({
        "success": true,
        "appointment": appointment
    })))
}

#[axum::debug_handler]
pub async fn update_appointment(
    State(db): State<Arc<ClinicDb>>,
    Path(appointment_id): Path<Uuid>,
    Json(request): Json<UpdateAppointmentRequest>,
) -> Result<Json<Value>, AppError> {
    let booking = BookingService::new(db);
    let appointment = booking
        .update(appointment_id, request)
        .await
        .map_err(into_app_error)?;

    Ok(Json(json!({
        "success": true,
        "message": "Appointment updated successfully",
        "appointment": appointment
    })))
}

#[axum::debug_handler]
pub async fn cancel_appointment(
    State(db): State<Arc<ClinicDb>>,
    Path(appointment_id): Path<Uuid>,
    Json(request): Json<CancelAppointmentRequest>,
) -> Result<Json<Value>, AppError> {
    let booking = BookingService::new(db);
    booking
        .cancel(appointment_id, request)
        .await
        .map_err(into_app_error)?;

    Ok(Json(json!({
        "success": true,
        "message": "Appointment cancelled successfully"
    })))
}

#[axum::debug_handler]
pub async fn reschedule_appointment(
    State(db): State<Arc<ClinicDb>>,
    Path(appointment_id): Path<Uuid>,
    Json(request): Json<RescheduleAppointmentRequest>,
) -> Result<Json<Value>, AppError> {
    let booking = BookingService::new(db);
    let appointment = booking
        .reschedule(appointment_id, request)
        .await
        .map_err(into_app_error)?;

    Ok(Json(json!({
        "success": true,
        "message": "Appointment rescheduled successfully",
        "appointment": appointment
    })))
}

#[axum::debug_handler]
pub async fn get_doctor_appointments(
    State(db): State<Arc<ClinicDb>>,
    Path(doctor_id): Path<Uuid>,
    Query(query): Query<DoctorAppointmentsQuery>,
) -> Result<Json<Value>, AppError> {
    let booking = BookingService::new(db);
    let page = booking.doctor_appointments(doctor_id, query).await;

    Ok(Json(json!({
        "success": true,
        "count": page.appointments.len(),
        "total": page.total,
        "total_pages": page.total_pages,
        "current_page": page.current_page,
        "appointments": page.appointments
    })))
}

#[axum::debug_handler]
pub async fn get_availability(
    State(db): State<Arc<ClinicDb>>,
    Path(doctor_id): Path<Uuid>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<Value>, AppError> {
    let availability = AvailabilityService::new(db);
    let open = availability
        .open_slots(doctor_id, query.date)
        .await
        .map_err(into_app_error)?;

    let response = AvailabilityResponse {
        doctor_id,
        date: query.date,
        total_slots: open.len(),
        available_slots: open.into_iter().map(hhmm::format).collect(),
    };

    Ok(Json(json!({
        "success": true,
        "date": response.date,
        "doctor_id": response.doctor_id,
        "available_slots": response.available_slots,
        "total_slots": response.total_slots
    })))
}

fn into_app_error(err: AppointmentError) -> AppError {
    match err {
        AppointmentError::SlotConflict => AppError::Conflict("Time slot is not available".to_string()),
        AppointmentError::CancellationWindow => AppError::BadRequest(err.to_string()),
        AppointmentError::NotFound => AppError::NotFound("Appointment not found".to_string()),
        AppointmentError::DoctorNotFound => {
            AppError::NotFound("Doctor not found or inactive".to_string())
        }
        AppointmentError::ServiceNotFound => {
            AppError::NotFound("Service not found or inactive".to_string())
        }
        AppointmentError::InvalidTime(_) => AppError::ValidationError(err.to_string()),
        AppointmentError::InvalidTransition { .. } => AppError::BadRequest(err.to_string()),
        AppointmentError::Validation(msg) => AppError::BadRequest(msg),
    }
}
