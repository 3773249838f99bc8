//! Demo catalog for local runs and tests.

use tracing::info;
use uuid::Uuid;

use shared_models::doctor::{Doctor, Specialty, WeeklyAvailability};
use shared_models::service::{PriceRange, Service, ServiceCategory};

use crate::ClinicDb;

fn doctor(name: &str, specialty: Specialty, license: &str, years: u32, fee: u32) -> Doctor {
    Doctor {
        id: Uuid::new_v4(),
        name: name.to_string(),
        specialty,
        license_number: license.to_string(),
        experience_years: years,
        languages: vec!["English".to_string()],
        availability: WeeklyAvailability::weekdays_nine_to_five(),
        consultation_fee: fee,
        rating_average: 4.6,
        rating_count: 0,
        is_active: true,
    }
}

fn service(
    name: &str,
    description: &str,
    category: ServiceCategory,
    price: PriceRange,
    duration_minutes: u32,
    is_popular: bool,
) -> Service {
    Service {
        id: Uuid::new_v4(),
        name: name.to_string(),
        description: description.to_string(),
        category,
        price_range: price,
        duration_minutes,
        features: vec![],
        is_active: true,
        is_popular,
        tags: vec![name.to_lowercase()],
    }
}

/// Populate the store with a small catalog of doctors and services.
pub async fn seed_demo_data(db: &ClinicDb) {
    let doctors = vec![
        doctor("Dr. Sarah Mitchell", Specialty::Cardiology, "MD-48210", 14, 180),
        doctor("Dr. James Okafor", Specialty::GeneralMedicine, "MD-31977", 9, 110),
        doctor("Dr. Elena Petrova", Specialty::Pediatrics, "MD-55034", 11, 130),
    ];
    let services = vec![
        service(
            "General Consultation",
            "A full consultation with a physician covering history, examination and plan.",
            ServiceCategory::GeneralMedicine,
            PriceRange { min: 100, max: 150 },
            30,
            true,
        ),
        service(
            "Cardiac Screening",
            "ECG and cardiovascular risk assessment with a cardiologist.",
            ServiceCategory::Cardiology,
            PriceRange { min: 220, max: 380 },
            45,
            true,
        ),
        service(
            "Pediatric Checkup",
            "Routine growth and development checkup for children.",
            ServiceCategory::Pediatrics,
            PriceRange { min: 90, max: 140 },
            30,
            false,
        ),
        service(
            "Preventive Health Panel",
            "Annual preventive screening with lab work review.",
            ServiceCategory::PreventiveCare,
            PriceRange { min: 150, max: 260 },
            60,
            false,
        ),
    ];

    let doctor_count = doctors.len();
    let service_count = services.len();

    for doc in doctors {
        db.insert_doctor(doc).await;
    }
    for svc in services {
        db.insert_service(svc).await;
    }

    info!("Seeded {} doctors and {} services", doctor_count, service_count);
}
