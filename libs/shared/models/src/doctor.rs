use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::hhmm;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doctor {
    pub id: Uuid,
    pub name: String,
    pub specialty: Specialty,
    pub license_number: String,
    pub experience_years: u32,
    #[serde(default)]
    pub languages: Vec<String>,
    /// Per-weekday working hours. Carried on the record but not consulted by
    /// the slot generator, which uses the clinic-wide 09:00-17:00 window.
    pub availability: WeeklyAvailability,
    pub consultation_fee: u32,
    pub rating_average: f32,
    pub rating_count: u32,
    pub is_active: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Specialty {
    Cardiology,
    #[serde(rename = "Emergency Medicine")]
    EmergencyMedicine,
    #[serde(rename = "General Medicine")]
    GeneralMedicine,
    Pediatrics,
    #[serde(rename = "Internal Medicine")]
    InternalMedicine,
    Surgery,
    Orthopedics,
    Dermatology,
    Neurology,
    Oncology,
    Psychiatry,
    Radiology,
    Anesthesiology,
    Pathology,
    Ophthalmology,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeeklyAvailability {
    pub monday: DayAvailability,
    pub tuesday: DayAvailability,
    pub wednesday: DayAvailability,
    pub thursday: DayAvailability,
    pub friday: DayAvailability,
    pub saturday: DayAvailability,
    pub sunday: DayAvailability,
}

impl WeeklyAvailability {
    /// Monday-Friday 09:00-17:00, weekend off.
    pub fn weekdays_nine_to_five() -> Self {
        let working = DayAvailability {
            start: NaiveTime::from_hms_opt(9, 0, 0),
            end: NaiveTime::from_hms_opt(17, 0, 0),
            is_available: true,
        };
        Self {
            monday: working.clone(),
            tuesday: working.clone(),
            wednesday: working.clone(),
            thursday: working.clone(),
            friday: working,
            saturday: DayAvailability::off(),
            sunday: DayAvailability::off(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayAvailability {
    #[serde(with = "hhmm::option")]
    pub start: Option<NaiveTime>,
    #[serde(with = "hhmm::option")]
    pub end: Option<NaiveTime>,
    pub is_available: bool,
}

impl DayAvailability {
    pub fn off() -> Self {
        Self {
            start: None,
            end: None,
            is_available: false,
        }
    }
}

impl Default for DayAvailability {
    fn default() -> Self {
        Self::off()
    }
}
