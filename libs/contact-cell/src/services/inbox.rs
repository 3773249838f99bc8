use std::sync::Arc;
use std::sync::LazyLock;

use chrono::Utc;
use regex::Regex;
use tracing::info;
use uuid::Uuid;

use shared_database::{ClinicDb, StoreError};
use shared_models::contact::{
    Contact, ContactPriority, ContactResponse, ContactStatus, ContactTopic,
};

use crate::models::{ContactError, ContactRequest, RespondContactRequest, UpdateContactRequest};

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\+]?[1-9][\d]{0,15}$").unwrap());

/// Accepts and triages contact-form submissions. Complaints and anything
/// marked urgent are prioritised for follow-up.
pub struct InboxService {
    db: Arc<ClinicDb>,
}

impl InboxService {
    pub fn new(db: Arc<ClinicDb>) -> Self {
        Self { db }
    }

    pub async fn submit(&self, request: ContactRequest) -> Result<Contact, ContactError> {
        let request = validate(request)?;
        let now = Utc::now();

        let priority = match request.topic {
            ContactTopic::Complaint => ContactPriority::High,
            _ => ContactPriority::Medium,
        };

        let contact = self
            .db
            .insert_contact(Contact {
                id: Uuid::new_v4(),
                first_name: request.first_name,
                last_name: request.last_name,
                email: request.email,
                phone: request.phone,
                subject: request.subject,
                message: request.message,
                topic: request.topic,
                status: ContactStatus::New,
                priority,
                response: None,
                created_at: now,
                updated_at: now,
            })
            .await;

        info!(contact_id = %contact.id, topic = ?contact.topic, "contact message received");
        Ok(contact)
    }

    pub async fn get(&self, id: Uuid) -> Result<Contact, ContactError> {
        self.db.find_contact(id).await.ok_or(ContactError::NotFound)
    }

    pub async fn list(&self, status: Option<ContactStatus>) -> Vec<Contact> {
        self.db.list_contacts(status).await
    }

    /// Record a staff reply and mark the message responded.
    pub async fn respond(
        &self,
        id: Uuid,
        request: RespondContactRequest,
    ) -> Result<Contact, ContactError> {
        if request.message.trim().is_empty() {
            return Err(ContactError::Validation(
                "response message is required".to_string(),
            ));
        }

        let responded = self
            .db
            .update_contact(id, |contact| {
                contact.status = ContactStatus::Responded;
                contact.response = Some(ContactResponse {
                    message: request.message,
                    responded_by: request.responded_by,
                    responded_at: Utc::now(),
                });
            })
            .await
            .map_err(map_store_error)?;

        info!(contact_id = %id, "contact message responded");
        Ok(responded)
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateContactRequest,
    ) -> Result<Contact, ContactError> {
        self.db
            .update_contact(id, |contact| contact.status = request.status)
            .await
            .map_err(map_store_error)
    }
}

fn map_store_error(err: StoreError) -> ContactError {
    match err {
        StoreError::NotFound => ContactError::NotFound,
        StoreError::SlotHeld { .. } => ContactError::NotFound,
    }
}

fn validate(mut request: ContactRequest) -> Result<ContactRequest, ContactError> {
    request.first_name = request.first_name.trim().to_string();
    request.last_name = request.last_name.trim().to_string();
    request.email = request.email.trim().to_string();
    request.subject = request.subject.trim().to_string();

    let required = [
        ("first name", &request.first_name, 50),
        ("last name", &request.last_name, 50),
        ("subject", &request.subject, 200),
        ("message", &request.message, 2000),
    ];
    for (field, value, max) in required {
        if value.is_empty() {
            return Err(ContactError::Validation(format!("{field} is required")));
        }
        if value.chars().count() > max {
            return Err(ContactError::Validation(format!(
                "{field} cannot exceed {max} characters"
            )));
        }
    }

    if !EMAIL_PATTERN.is_match(&request.email) {
        return Err(ContactError::Validation(
            "please enter a valid email address".to_string(),
        ));
    }
    if let Some(phone) = request.phone.as_deref() {
        if !PHONE_PATTERN.is_match(phone) {
            return Err(ContactError::Validation(
                "please enter a valid phone number".to_string(),
            ));
        }
    }

    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> ContactRequest {
        ContactRequest {
            first_name: "Dana".to_string(),
            last_name: "Reyes".to_string(),
            email: "dana@example.com".to_string(),
            phone: Some("+15550123".to_string()),
            subject: "Opening hours".to_string(),
            message: "Are you open on Saturdays?".to_string(),
            topic: ContactTopic::GeneralInquiry,
        }
    }

    #[tokio::test]
    async fn submission_lands_as_new_with_default_priority() {
        let inbox = InboxService::new(Arc::new(ClinicDb::new()));
        let contact = inbox.submit(request()).await.unwrap();

        assert_eq!(contact.status, ContactStatus::New);
        assert_eq!(contact.priority, ContactPriority::Medium);
    }

    #[tokio::test]
    async fn complaints_are_raised_to_high_priority() {
        let inbox = InboxService::new(Arc::new(ClinicDb::new()));
        let mut complaint = request();
        complaint.topic = ContactTopic::Complaint;

        let contact = inbox.submit(complaint).await.unwrap();
        assert_eq!(contact.priority, ContactPriority::High);
    }

    #[tokio::test]
    async fn bad_submissions_are_refused() {
        let inbox = InboxService::new(Arc::new(ClinicDb::new()));

        let mut blank = request();
        blank.first_name = "   ".to_string();
        assert!(inbox.submit(blank).await.is_err());

        let mut bad_email = request();
        bad_email.email = "not-an-email".to_string();
        assert!(inbox.submit(bad_email).await.is_err());

        let mut bad_phone = request();
        bad_phone.phone = Some("0-800-CLINIC".to_string());
        assert!(inbox.submit(bad_phone).await.is_err());

        let mut long_subject = request();
        long_subject.subject = "x".repeat(201);
        assert!(inbox.submit(long_subject).await.is_err());
    }

    #[tokio::test]
    async fn responding_records_the_reply_and_marks_responded() {
        let inbox = InboxService::new(Arc::new(ClinicDb::new()));
        let contact = inbox.submit(request()).await.unwrap();

        let responded = inbox
            .respond(
                contact.id,
                RespondContactRequest {
                    message: "We are open Saturday mornings.".to_string(),
                    responded_by: Some("Front Desk".to_string()),
                },
            )
            .await
            .unwrap();

        assert_eq!(responded.status, ContactStatus::Responded);
        let reply = responded.response.unwrap();
        assert_eq!(reply.message, "We are open Saturday mornings.");
        assert_eq!(reply.responded_by.as_deref(), Some("Front Desk"));

        let fetched = inbox.get(contact.id).await.unwrap();
        assert_eq!(fetched.status, ContactStatus::Responded);
    }

    #[tokio::test]
    async fn respond_requires_a_message_and_an_existing_contact() {
        let inbox = InboxService::new(Arc::new(ClinicDb::new()));
        let contact = inbox.submit(request()).await.unwrap();

        let blank = inbox
            .respond(
                contact.id,
                RespondContactRequest {
                    message: "   ".to_string(),
                    responded_by: None,
                },
            )
            .await;
        assert!(matches!(blank, Err(ContactError::Validation(_))));

        let missing = inbox
            .respond(
                Uuid::new_v4(),
                RespondContactRequest {
                    message: "hello".to_string(),
                    responded_by: None,
                },
            )
            .await;
        assert!(matches!(missing, Err(ContactError::NotFound)));

        assert!(inbox.get(Uuid::new_v4()).await.is_err());
    }

    #[tokio::test]
    async fn status_updates_move_messages_through_the_inbox() {
        let db = Arc::new(ClinicDb::new());
        let inbox = InboxService::new(Arc::clone(&db));
        let contact = inbox.submit(request()).await.unwrap();

        let updated = inbox
            .update(
                contact.id,
                UpdateContactRequest {
                    status: ContactStatus::Responded,
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.status, ContactStatus::Responded);

        let open = inbox.list(Some(ContactStatus::New)).await;
        assert!(open.is_empty());
    }
}
