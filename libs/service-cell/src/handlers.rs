use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use shared_database::ClinicDb;
use shared_models::error::AppError;

use crate::models::{CreateServiceRequest, ServiceError, ServiceListQuery, UpdateServiceRequest};
use crate::services::catalog::CatalogService;

#[axum::debug_handler]
pub async fn list_services(
    State(state): State<Arc<ClinicDb>>,
    Query(query): Query<ServiceListQuery>,
) -> Result<Json<Value>, AppError> {
    let catalog = CatalogService::new(state);
    let services = catalog.list(query).await;
    let total = services.len();

    Ok(Json(json!({
        "services": services,
        "total": total,
    })))
}

#[axum::debug_handler]
pub async fn get_service(
    State(state): State<Arc<ClinicDb>>,
    Path(service_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let catalog = CatalogService::new(state);
    let service = catalog.get(service_id).await.map_err(into_app_error)?;

    Ok(Json(json!(service)))
}

#[axum::debug_handler]
pub async fn get_categories(
    State(state): State<Arc<ClinicDb>>,
) -> Result<Json<Value>, AppError> {
    let catalog = CatalogService::new(state);
    let categories = catalog.categories().await;

    Ok(Json(json!({
        "success": true,
        "categories": categories,
    })))
}

#[axum::debug_handler]
pub async fn create_service(
    State(state): State<Arc<ClinicDb>>,
    Json(request): Json<CreateServiceRequest>,
) -> Result<Json<Value>, AppError> {
    let catalog = CatalogService::new(state);
    let service = catalog.create(request).await.map_err(into_app_error)?;

    Ok(Json(json!({
        "success": true,
        "message": "Service created successfully",
        "service": service,
    })))
}

#[axum::debug_handler]
pub async fn update_service(
    State(state): State<Arc<ClinicDb>>,
    Path(service_id): Path<Uuid>,
    Json(request): Json<UpdateServiceRequest>,
) -> Result<Json<Value>, AppError> {
    let catalog = CatalogService::new(state);
    let service = catalog
        .update(service_id, request)
        .await
        .map_err(into_app_error)?;

    Ok(Json(json!({
        "success": true,
        "message": "Service updated successfully",
        "service": service,
    })))
}

#[axum::debug_handler]
pub async fn delete_service(
    State(state): State<Arc<ClinicDb>>,
    Path(service_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let catalog = CatalogService::new(state);
    catalog.delete(service_id).await.map_err(into_app_error)?;

    Ok(Json(json!({
        "success": true,
        "message": "Service deleted successfully",
    })))
}

fn into_app_error(err: ServiceError) -> AppError {
    match err {
        ServiceError::NotFound => AppError::NotFound("Service not found".to_string()),
        ServiceError::Validation(msg) => AppError::ValidationError(msg),
    }
}
