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
    ContactError, ContactListQuery, ContactRequest, RespondContactRequest, UpdateContactRequest,
};
use crate::services::inbox::InboxService;

#[axum::debug_handler]
pub async fn submit_contact(
    State(state): State<Arc<ClinicDb>>,
    Json(request): Json<ContactRequest>,
) -> Result<Json<Value>, AppError> {
    let inbox = InboxService::new(state);
    let contact = inbox.submit(request).await.map_err(into_app_error)?;

    Ok(Json(json!({
        "success": true,
        "message": "Thank you for your message. We will get back to you soon.",
        "contact": contact,
    })))
}

#[axum::debug_handler]
pub async fn list_contacts(
    State(state): State<Arc<ClinicDb>>,
    Query(query): Query<ContactListQuery>,
) -> Result<Json<Value>, AppError> {
    let inbox = InboxService::new(state);
    let contacts = inbox.list(query.status).await;
    let total = contacts.len();

    Ok(Json(json!({
        "contacts": contacts,
        "total": total,
    })))
}

#[axum::debug_handler]
pub async fn get_contact(
    State(state): State<Arc<ClinicDb>>,
    Path(contact_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let inbox = InboxService::new(state);
    let contact = inbox.get(contact_id).await.map_err(into_app_error)?;

    Ok(Json(json!({
        "success": true,
        "contact": contact,
    })))
}

#[axum::debug_handler]
pub async fn respond_contact(
    State(state): State<Arc<ClinicDb>>,
    Path(contact_id): Path<Uuid>,
    Json(request): Json<RespondContactRequest>,
) -> Result<Json<Value>, AppError> {
    let inbox = InboxService::new(state);
    inbox
        .respond(contact_id, request)
        .await
        .map_err(into_app_error)?;

    Ok(Json(json!({
        "success": true,
        "message": "Response sent successfully",
    })))
}

#[axum::debug_handler]
pub async fn update_contact(
    State(state): State<Arc<ClinicDb>>,
    Path(contact_id): Path<Uuid>,
    Json(request): Json<UpdateContactRequest>,
) -> Result<Json<Value>, AppError> {
    let inbox = InboxService::new(state);
    let contact = inbox
        .update(contact_id, request)
        .await
        .map_err(into_app_error)?;

    Ok(Json(json!(contact)))
}

fn into_app_error(e: ContactError) -> AppError {
    match e {
        ContactError::NotFound => AppError::NotFound("Contact message not found".to_string()),
        ContactError::Validation(msg) => AppError::ValidationError(msg),
    }
}
