use serde::Deserialize;
use thiserror::Error;

use shared_models::service::{PriceRange, ServiceCategory};

#[derive(Debug, Deserialize)]
pub struct ServiceListQuery {
    pub category: Option<ServiceCategory>,
    pub popular: Option<bool>,
    pub q: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateServiceRequest {
    pub name: String,
    pub description: String,
    pub category: ServiceCategory,
    pub price_range: PriceRange,
    pub duration_minutes: u32,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub is_popular: bool,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateServiceRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<ServiceCategory>,
    pub price_range: Option<PriceRange>,
    pub duration_minutes: Option<u32>,
    pub features: Option<Vec<String>>,
    pub is_active: Option<bool>,
    pub is_popular: Option<bool>,
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("service not found")]
    NotFound,

    #[error("{0}")]
    Validation(String),
}
