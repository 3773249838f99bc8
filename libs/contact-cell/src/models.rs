use serde::Deserialize;
use thiserror::Error;

use shared_models::contact::{ContactStatus, ContactTopic};

#[derive(Debug, Clone, Deserialize)]
pub struct ContactRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    #[serde(default)]
    pub topic: ContactTopic,
}

#[derive(Debug, Deserialize)]
pub struct ContactListQuery {
    pub status: Option<ContactStatus>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateContactRequest {
    pub status: ContactStatus,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RespondContactRequest {
    pub message: String,
    pub responded_by: Option<String>,
}

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("contact message not found")]
    NotFound,
    #[error("{0}")]
    Validation(String),
}
