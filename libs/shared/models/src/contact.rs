use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    pub topic: ContactTopic,
    pub status: ContactStatus,
    pub priority: ContactPriority,
    pub response: Option<ContactResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A staff reply to a contact submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactResponse {
    pub message: String,
    pub responded_by: Option<String>,
    pub responded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ContactTopic {
    #[serde(rename = "General Inquiry")]
    GeneralInquiry,
    #[serde(rename = "Appointment Request")]
    AppointmentRequest,
    #[serde(rename = "Medical Question")]
    MedicalQuestion,
    #[serde(rename = "Insurance Question")]
    InsuranceQuestion,
    #[serde(rename = "Billing Question")]
    BillingQuestion,
    Feedback,
    Complaint,
    Other,
}

impl Default for ContactTopic {
    fn default() -> Self {
        ContactTopic::GeneralInquiry
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ContactStatus {
    New,
    InProgress,
    Responded,
    Closed,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContactPriority {
    Low,
    Medium,
    High,
    Urgent,
}

impl Default for ContactPriority {
    fn default() -> Self {
        ContactPriority::Medium
    }
}
