use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use shared_database::ClinicDb;
use shared_models::error::AppError;

use crate::models::{
    CreateDoctorRequest, DoctorError, DoctorListQuery, TopRatedQuery, UpdateDoctorRequest,
};
use crate::services::doctor::DoctorService;

#[axum::debug_handler]
pub async fn list_doctors(
    State(state): State<Arc<ClinicDb>>,
    Query(query): Query<DoctorListQuery>,
) -> Result<Json<Value>, AppError> {
    let service = DoctorService::new(state);
    let doctors = service.list(query.specialty).await;
    let total = doctors.len();

    Ok(Json(json!({
        "doctors": doctors,
        "total": total,
    })))
}

#[axum::debug_handler]
pub async fn get_doctor(
    State(state): State<Arc<ClinicDb>>,
    Path(doctor_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let service = DoctorService::new(state);
    let doctor = service.get(doctor_id).await.map_err(into_app_error)?;

    Ok(Json(json!(doctor)))
}

#[axum::debug_handler]
pub async fn get_top_rated_doctors(
    State(state): State<Arc<ClinicDb>>,
    Query(query): Query<TopRatedQuery>,
) -> Result<Json<Value>, AppError> {
    let service = DoctorService::new(state);
    let doctors = service.top_rated(query.limit).await;
    let count = doctors.len();

    Ok(Json(json!({
        "success": true,
        "count": count,
        "doctors": doctors,
    })))
}

#[axum::debug_handler]
pub async fn get_specialties(
    State(state): State<Arc<ClinicDb>>,
) -> Result<Json<Value>, AppError> {
    let service = DoctorService::new(state);
    let specialties = service.specialties().await;

    Ok(Json(json!({
        "success": true,
        "specialties": specialties,
    })))
}

#[axum::debug_handler]
pub async fn create_doctor(
    State(state): State<Arc<ClinicDb>>,
    Json(request): Json<CreateDoctorRequest>,
) -> Result<Json<Value>, AppError> {
    let service = DoctorService::new(state);
    let doctor = service.create(request).await.map_err(into_app_error)?;

    Ok(Json(json!({
        "success": true,
        "message": "Doctor profile created successfully",
        "doctor": doctor,
    })))
}

#[axum::debug_handler]
pub async fn update_doctor(
    State(state): State<Arc<ClinicDb>>,
    Path(doctor_id): Path<Uuid>,
    Json(request): Json<UpdateDoctorRequest>,
) -> Result<Json<Value>, AppError> {
    let service = DoctorService::new(state);
    let doctor = service
        .update(doctor_id, request)
        .await
        .map_err(into_app_error)?;

    Ok(Json(json!({
        "success": true,
        "message": "Doctor profile updated successfully",
        "doctor": doctor,
    })))
}

#[axum::debug_handler]
pub async fn delete_doctor(
    State(state): State<Arc<ClinicDb>>,
    Path(doctor_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let service = DoctorService::new(state);
    service.delete(doctor_id).await.map_err(into_app_error)?;

    Ok(Json(json!({
        "success": true,
        "message": "Doctor profile deleted successfully",
    })))
}

fn into_app_error(err: DoctorError) -> AppError {
    match err {
        DoctorError::NotFound => AppError::NotFound("Doctor not found".to_string()),
        DoctorError::Validation(msg) => AppError::ValidationError(msg),
    }
}
