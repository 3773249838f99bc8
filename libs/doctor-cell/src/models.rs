use serde::Deserialize;
use thiserror::Error;

use shared_models::doctor::{Specialty, WeeklyAvailability};

#[derive(Debug, Deserialize)]
pub struct DoctorListQuery {
    pub specialty: Option<Specialty>,
}

#[derive(Debug, Deserialize)]
pub struct TopRatedQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateDoctorRequest {
    pub name: String,
    pub specialty: Specialty,
    pub license_number: String,
    pub experience_years: u32,
    #[serde(default)]
    pub languages: Vec<String>,
    pub availability: Option<WeeklyAvailability>,
    pub consultation_fee: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateDoctorRequest {
    pub name: Option<String>,
    pub specialty: Option<Specialty>,
    pub license_number: Option<String>,
    pub experience_years: Option<u32>,
    pub languages: Option<Vec<String>>,
    pub availability: Option<WeeklyAvailability>,
    pub consultation_fee: Option<u32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Error)]
pub enum DoctorError {
    #[error("doctor not found")]
    NotFound,

    #[error("{0}")]
    Validation(String),
}
