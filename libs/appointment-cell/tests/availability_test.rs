mod common;

use assert_matches::assert_matches;
use chrono::NaiveTime;

use appointment_cell::models::{AppointmentError, CancelAppointmentRequest};
use appointment_cell::services::availability::AvailabilityService;
use common::TestClinic;
use shared_models::hhmm;

#[tokio::test]
async fn empty_day_offers_the_full_grid() {
    let clinic = TestClinic::new().await;
    let date = clinic.next_week();

    let open = clinic
        .availability()
        .open_slots(clinic.doctor_id, date)
        .await
        .unwrap();

    assert_eq!(open.len(), 16);
    assert_eq!(open.first(), NaiveTime::from_hms_opt(9, 0, 0).as_ref());
    assert_eq!(open.last(), NaiveTime::from_hms_opt(16, 30, 0).as_ref());
}

#[tokio::test]
async fn booked_slots_disappear_from_the_grid() {
    let clinic = TestClinic::new().await;
    let booking = clinic.booking();
    let date = clinic.next_week();

    booking.book(clinic.book_request(date, "09:00")).await.unwrap();
    booking.book(clinic.book_request(date, "09:30")).await.unwrap();

    let open = clinic
        .availability()
        .open_slots(clinic.doctor_id, date)
        .await
        .unwrap();

    assert_eq!(open.len(), 14);
    assert_eq!(open.first(), NaiveTime::from_hms_opt(10, 0, 0).as_ref());
    assert_eq!(open.last(), NaiveTime::from_hms_opt(16, 30, 0).as_ref());
    assert!(!open.contains(&NaiveTime::from_hms_opt(9, 0, 0).unwrap()));
    assert!(!open.contains(&NaiveTime::from_hms_opt(9, 30, 0).unwrap()));
}

#[tokio::test]
async fn cancelled_appointment_never_masks_a_slot() {
    let clinic = TestClinic::new().await;
    let booking = clinic.booking();
    let date = clinic.next_week();

    let booked = booking.book(clinic.book_request(date, "11:00")).await.unwrap();
    booking
        .cancel(
            booked.id,
            CancelAppointmentRequest {
                reason: "schedule change".to_string(),
                cancelled_by: None,
            },
        )
        .await
        .unwrap();

    let open = clinic
        .availability()
        .open_slots(clinic.doctor_id, date)
        .await
        .unwrap();

    assert_eq!(open.len(), 16);
    assert!(open.contains(&NaiveTime::from_hms_opt(11, 0, 0).unwrap()));
}

#[tokio::test]
async fn every_listed_slot_is_bookable() {
    let clinic = TestClinic::new().await;
    let booking = clinic.booking();
    let date = clinic.next_week();

    booking.book(clinic.book_request(date, "13:00")).await.unwrap();

    let open = clinic
        .availability()
        .open_slots(clinic.doctor_id, date)
        .await
        .unwrap();

    for slot in open {
        booking
            .book(clinic.book_request(date, &hhmm::format(slot)))
            .await
            .unwrap_or_else(|e| panic!("listed slot {} refused: {}", hhmm::format(slot), e));
    }

    // Day is now full.
    let open = clinic
        .availability()
        .open_slots(clinic.doctor_id, date)
        .await
        .unwrap();
    assert!(open.is_empty());
}

#[tokio::test]
async fn unknown_or_inactive_doctor_is_rejected() {
    let clinic = TestClinic::new().await;
    let date = clinic.next_week();

    let missing = clinic
        .availability()
        .open_slots(uuid::Uuid::new_v4(), date)
        .await;
    assert_matches!(missing, Err(AppointmentError::DoctorNotFound));

    let mut doctor = clinic.db.find_doctor(clinic.doctor_id).await.unwrap();
    doctor.is_active = false;
    clinic.db.insert_doctor(doctor).await;

    let inactive = clinic
        .availability()
        .open_slots(clinic.doctor_id, date)
        .await;
    assert_matches!(inactive, Err(AppointmentError::DoctorNotFound));
}

#[tokio::test]
async fn appointments_on_other_days_do_not_leak() {
    let clinic = TestClinic::new().await;
    let booking = clinic.booking();
    let date = clinic.next_week();
    let other_day = date + chrono::Days::new(1);

    booking.book(clinic.book_request(date, "09:00")).await.unwrap();

    let open = clinic
        .availability()
        .open_slots(clinic.doctor_id, other_day)
        .await
        .unwrap();
    assert_eq!(open.len(), AvailabilityService::slot_grid().len());
}
