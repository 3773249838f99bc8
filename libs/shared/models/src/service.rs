use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub category: ServiceCategory,
    pub price_range: PriceRange,
    /// 5-480 minutes, copied onto each appointment at booking time.
    pub duration_minutes: u32,
    #[serde(default)]
    pub features: Vec<String>,
    pub is_active: bool,
    pub is_popular: bool,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: u32,
    pub max: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ServiceCategory {
    Cardiology,
    #[serde(rename = "Emergency Medicine")]
    EmergencyMedicine,
    #[serde(rename = "General Medicine")]
    GeneralMedicine,
    Pediatrics,
    #[serde(rename = "Internal Medicine")]
    InternalMedicine,
    Surgery,
    Diagnostic,
    #[serde(rename = "Preventive Care")]
    PreventiveCare,
    #[serde(rename = "Specialized Treatment")]
    SpecializedTreatment,
    Rehabilitation,
    #[serde(rename = "Mental Health")]
    MentalHealth,
    #[serde(rename = "Women Health")]
    WomenHealth,
    #[serde(rename = "Men Health")]
    MenHealth,
    #[serde(rename = "Senior Care")]
    SeniorCare,
}

impl Service {
    /// Case-insensitive match against name, description and tags.
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
            || self.tags.iter().any(|tag| tag.contains(&needle))
    }
}
