use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use shared_database::{ClinicDb, StoreError};
use shared_models::doctor::{Doctor, Specialty, WeeklyAvailability};

use crate::models::{CreateDoctorRequest, DoctorError, UpdateDoctorRequest};

const TOP_RATED_DEFAULT_LIMIT: usize = 10;

/// Doctor directory: public reads plus profile administration. Inactive
/// doctors never appear in public listings or lookups.
pub struct DoctorService {
    db: Arc<ClinicDb>,
}

impl DoctorService {
    pub fn new(db: Arc<ClinicDb>) -> Self {
        Self { db }
    }

    pub async fn list(&self, specialty: Option<Specialty>) -> Vec<Doctor> {
        let doctors: Vec<Doctor> = self
            .db
            .list_doctors(specialty)
            .await
            .into_iter()
            .filter(|doctor| doctor.is_active)
            .collect();
        debug!(count = doctors.len(), ?specialty, "listed doctors");
        doctors
    }

    pub async fn get(&self, id: Uuid) -> Result<Doctor, DoctorError> {
        self.db
            .find_doctor(id)
            .await
            .filter(|doctor| doctor.is_active)
            .ok_or(DoctorError::NotFound)
    }

    /// Active doctors by rating, best first; count ties break equal averages.
    pub async fn top_rated(&self, limit: Option<usize>) -> Vec<Doctor> {
        let mut doctors: Vec<Doctor> = self
            .db
            .list_doctors(None)
            .await
            .into_iter()
            .filter(|doctor| doctor.is_active)
            .collect();
        doctors.sort_by(|a, b| {
            b.rating_average
                .total_cmp(&a.rating_average)
                .then_with(|| b.rating_count.cmp(&a.rating_count))
        });
        doctors.truncate(limit.unwrap_or(TOP_RATED_DEFAULT_LIMIT));
        doctors
    }

    /// Distinct specialties among active doctors.
    pub async fn specialties(&self) -> Vec<Specialty> {
        let mut specialties = Vec::new();
        for doctor in self.db.list_doctors(None).await {
            if doctor.is_active && !specialties.contains(&doctor.specialty) {
                specialties.push(doctor.specialty);
            }
        }
        specialties
    }

    pub async fn create(&self, request: CreateDoctorRequest) -> Result<Doctor, DoctorError> {
        if request.name.trim().is_empty() {
            return Err(DoctorError::Validation("name is required".to_string()));
        }
        if request.license_number.trim().is_empty() {
            return Err(DoctorError::Validation(
                "license number is required".to_string(),
            ));
        }

        let doctor = self
            .db
            .insert_doctor(Doctor {
                id: Uuid::new_v4(),
                name: request.name.trim().to_string(),
                specialty: request.specialty,
                license_number: request.license_number.trim().to_string(),
                experience_years: request.experience_years,
                languages: request.languages,
                availability: request
                    .availability
                    .unwrap_or_else(WeeklyAvailability::weekdays_nine_to_five),
                consultation_fee: request.consultation_fee,
                rating_average: 0.0,
                rating_count: 0,
                is_active: true,
            })
            .await;

        info!(doctor_id = %doctor.id, "doctor profile created");
        Ok(doctor)
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateDoctorRequest,
    ) -> Result<Doctor, DoctorError> {
        let updated = self
            .db
            .update_doctor(id, |doctor| {
                if let Some(name) = request.name {
                    doctor.name = name;
                }
                if let Some(specialty) = request.specialty {
                    doctor.specialty = specialty;
                }
                if let Some(license_number) = request.license_number {
                    doctor.license_number = license_number;
                }
                if let Some(experience_years) = request.experience_years {
                    doctor.experience_years = experience_years;
                }
                if let Some(languages) = request.languages {
                    doctor.languages = languages;
                }
                if let Some(availability) = request.availability {
                    doctor.availability = availability;
                }
                if let Some(consultation_fee) = request.consultation_fee {
                    doctor.consultation_fee = consultation_fee;
                }
                if let Some(is_active) = request.is_active {
                    doctor.is_active = is_active;
                }
            })
            .await
            .map_err(map_store_error)?;

        info!(doctor_id = %id, "doctor profile updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), DoctorError> {
        self.db.delete_doctor(id).await.map_err(map_store_error)?;
        info!(doctor_id = %id, "doctor profile deleted");
        Ok(())
    }
}

fn map_store_error(err: StoreError) -> DoctorError {
    match err {
        StoreError::NotFound => DoctorError::NotFound,
        StoreError::SlotHeld { .. } => DoctorError::NotFound,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doctor(name: &str, specialty: Specialty, active: bool) -> Doctor {
        Doctor {
            id: Uuid::new_v4(),
            name: name.to_string(),
            specialty,
            license_number: "MD-0001".to_string(),
            experience_years: 5,
            languages: vec!["English".to_string()],
            availability: WeeklyAvailability::weekdays_nine_to_five(),
            consultation_fee: 100,
            rating_average: 4.5,
            rating_count: 10,
            is_active: active,
        }
    }

    fn create_request(name: &str) -> CreateDoctorRequest {
        CreateDoctorRequest {
            name: name.to_string(),
            specialty: Specialty::GeneralMedicine,
            license_number: "MD-77001".to_string(),
            experience_years: 6,
            languages: vec![],
            availability: None,
            consultation_fee: 95,
        }
    }

    #[tokio::test]
    async fn listing_hides_inactive_doctors_and_filters_by_specialty() {
        let db = Arc::new(ClinicDb::new());
        db.insert_doctor(doctor("Dr. A", Specialty::Cardiology, true)).await;
        db.insert_doctor(doctor("Dr. B", Specialty::Pediatrics, true)).await;
        db.insert_doctor(doctor("Dr. C", Specialty::Cardiology, false)).await;

        let service = DoctorService::new(Arc::clone(&db));

        let all = service.list(None).await;
        assert_eq!(all.len(), 2);

        let cardio = service.list(Some(Specialty::Cardiology)).await;
        assert_eq!(cardio.len(), 1);
        assert_eq!(cardio[0].name, "Dr. A");
    }

    #[tokio::test]
    async fn get_refuses_inactive_and_unknown_doctors() {
        let db = Arc::new(ClinicDb::new());
        let inactive = db
            .insert_doctor(doctor("Dr. Gone", Specialty::GeneralMedicine, false))
            .await;

        let service = DoctorService::new(Arc::clone(&db));
        assert!(service.get(inactive.id).await.is_err());
        assert!(service.get(Uuid::new_v4()).await.is_err());
    }

    #[tokio::test]
    async fn created_profile_is_active_and_unrated() {
        let db = Arc::new(ClinicDb::new());
        let service = DoctorService::new(Arc::clone(&db));

        let created = service.create(create_request("Dr. Ines Marchetti")).await.unwrap();
        assert!(created.is_active);
        assert_eq!(created.rating_average, 0.0);
        assert_eq!(created.rating_count, 0);

        let fetched = service.get(created.id).await.unwrap();
        assert_eq!(fetched.name, "Dr. Ines Marchetti");
    }

    #[tokio::test]
    async fn create_requires_name_and_license() {
        let service = DoctorService::new(Arc::new(ClinicDb::new()));

        let mut blank_name = create_request("  ");
        blank_name.license_number = "MD-1".to_string();
        assert!(matches!(
            service.create(blank_name).await,
            Err(DoctorError::Validation(_))
        ));

        let mut blank_license = create_request("Dr. Ok");
        blank_license.license_number = "".to_string();
        assert!(matches!(
            service.create(blank_license).await,
            Err(DoctorError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn update_patches_only_the_given_fields() {
        let db = Arc::new(ClinicDb::new());
        let service = DoctorService::new(Arc::clone(&db));
        let created = service.create(create_request("Dr. Priya Nair")).await.unwrap();

        let updated = service
            .update(
                created.id,
                UpdateDoctorRequest {
                    name: None,
                    specialty: Some(Specialty::Cardiology),
                    license_number: None,
                    experience_years: None,
                    languages: None,
                    availability: None,
                    consultation_fee: Some(140),
                    is_active: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Dr. Priya Nair");
        assert_eq!(updated.specialty, Specialty::Cardiology);
        assert_eq!(updated.consultation_fee, 140);
    }

    #[tokio::test]
    async fn deactivating_via_update_removes_from_public_view() {
        let db = Arc::new(ClinicDb::new());
        let service = DoctorService::new(Arc::clone(&db));
        let created = service.create(create_request("Dr. Sam Oduya")).await.unwrap();

        service
            .update(
                created.id,
                UpdateDoctorRequest {
                    name: None,
                    specialty: None,
                    license_number: None,
                    experience_years: None,
                    languages: None,
                    availability: None,
                    consultation_fee: None,
                    is_active: Some(false),
                },
            )
            .await
            .unwrap();

        assert!(service.get(created.id).await.is_err());
        assert!(service.list(None).await.is_empty());
    }

    #[tokio::test]
    async fn delete_removes_the_profile() {
        let db = Arc::new(ClinicDb::new());
        let service = DoctorService::new(Arc::clone(&db));
        let created = service.create(create_request("Dr. Lena Hart")).await.unwrap();

        service.delete(created.id).await.unwrap();
        assert!(service.get(created.id).await.is_err());
        assert!(matches!(
            service.delete(created.id).await,
            Err(DoctorError::NotFound)
        ));
    }

    #[tokio::test]
    async fn top_rated_orders_by_average_then_count() {
        let db = Arc::new(ClinicDb::new());
        let mut best = doctor("Dr. Best", Specialty::Cardiology, true);
        best.rating_average = 4.9;
        let mut busy = doctor("Dr. Busy", Specialty::Pediatrics, true);
        busy.rating_average = 4.5;
        busy.rating_count = 200;
        let mut quiet = doctor("Dr. Quiet", Specialty::Neurology, true);
        quiet.rating_average = 4.5;
        quiet.rating_count = 3;
        db.insert_doctor(best).await;
        db.insert_doctor(busy).await;
        db.insert_doctor(quiet).await;

        let service = DoctorService::new(Arc::clone(&db));
        let ranked = service.top_rated(Some(2)).await;
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].name, "Dr. Best");
        assert_eq!(ranked[1].name, "Dr. Busy");
    }

    #[tokio::test]
    async fn specialties_are_distinct_and_active_only() {
        let db = Arc::new(ClinicDb::new());
        db.insert_doctor(doctor("Dr. A", Specialty::Cardiology, true)).await;
        db.insert_doctor(doctor("Dr. B", Specialty::Cardiology, true)).await;
        db.insert_doctor(doctor("Dr. C", Specialty::Neurology, false)).await;

        let service = DoctorService::new(Arc::clone(&db));
        let specialties = service.specialties().await;
        assert_eq!(specialties, vec![Specialty::Cardiology]);
    }
}
