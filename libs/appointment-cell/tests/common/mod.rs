#![allow(dead_code)]

use std::sync::Arc;

use chrono::{Days, Duration, NaiveDate, Timelike, Utc};
use uuid::Uuid;

use appointment_cell::models::BookAppointmentRequest;
use appointment_cell::services::availability::AvailabilityService;
use appointment_cell::services::booking::BookingService;
use shared_database::ClinicDb;
use shared_models::appointment::{Appointment, AppointmentStatus, VisitKind};
use shared_models::doctor::{Doctor, Specialty, WeeklyAvailability};
use shared_models::service::{PriceRange, Service, ServiceCategory};

pub struct TestClinic {
    pub db: Arc<ClinicDb>,
    pub doctor_id: Uuid,
    pub service_id: Uuid,
}

impl TestClinic {
    pub async fn new() -> Self {
        let db = Arc::new(ClinicDb::new());

        let doctor = db
            .insert_doctor(Doctor {
                id: Uuid::new_v4(),
                name: "Dr. Priya Nair".to_string(),
                specialty: Specialty::GeneralMedicine,
                license_number: "MD-10001".to_string(),
                experience_years: 8,
                languages: vec!["English".to_string()],
                availability: WeeklyAvailability::weekdays_nine_to_five(),
                consultation_fee: 110,
                rating_average: 4.8,
                rating_count: 52,
                is_active: true,
            })
            .await;

        let service = db
            .insert_service(Service {
                id: Uuid::new_v4(),
                name: "General Consultation".to_string(),
                description: "Standard consultation".to_string(),
                category: ServiceCategory::GeneralMedicine,
                price_range: PriceRange { min: 100, max: 150 },
                duration_minutes: 30,
                features: vec![],
                is_active: true,
                is_popular: true,
                tags: vec!["consultation".to_string()],
            })
            .await;

        Self {
            db,
            doctor_id: doctor.id,
            service_id: service.id,
        }
    }

    pub fn booking(&self) -> BookingService {
        BookingService::new(Arc::clone(&self.db))
    }

    pub fn availability(&self) -> AvailabilityService {
        AvailabilityService::new(Arc::clone(&self.db))
    }

    /// A date comfortably in the future and inside the booking horizon.
    pub fn next_week(&self) -> NaiveDate {
        Utc::now().date_naive() + Days::new(7)
    }

    pub fn book_request(&self, date: NaiveDate, time: &str) -> BookAppointmentRequest {
        BookAppointmentRequest {
            patient_name: "Morgan Blake".to_string(),
            patient_email: "morgan@example.com".to_string(),
            patient_phone: Some("+15550100".to_string()),
            doctor_id: self.doctor_id,
            service_id: self.service_id,
            date,
            time: time.to_string(),
            kind: Some(VisitKind::Consultation),
            notes: None,
            symptoms: vec![],
        }
    }

    /// Insert a scheduled appointment directly into the store, starting the
    /// given number of hours from now (seconds truncated to the minute grid).
    pub async fn insert_appointment_starting_in(&self, hours: i64) -> Appointment {
        let start = Utc::now() + Duration::hours(hours);
        let time = start
            .time()
            .with_second(0)
            .and_then(|t| t.with_nanosecond(0))
            .unwrap_or(start.time());
        let now = Utc::now();

        self.db
            .insert_appointment(Appointment {
                id: Uuid::new_v4(),
                patient_name: "Morgan Blake".to_string(),
                patient_email: "morgan@example.com".to_string(),
                patient_phone: None,
                doctor_id: self.doctor_id,
                service_id: self.service_id,
                date: start.date_naive(),
                time,
                status: AppointmentStatus::Scheduled,
                kind: VisitKind::Consultation,
                duration_minutes: 30,
                amount: 100,
                notes: None,
                symptoms: vec![],
                cancellation_reason: None,
                cancelled_by: None,
                cancelled_at: None,
                created_at: now,
                updated_at: now,
            })
            .await
            .expect("fixture slot is free")
    }
}
