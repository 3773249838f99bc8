//! Booking, cancellation and reschedule rules.
//!
//! Slot conflicts are not checked-then-acted here: the store claims the slot
//! ledger key atomically on insert/move, so a conflicting booking fails with
//! [`AppointmentError::SlotConflict`] even under concurrent requests.

use std::sync::Arc;

use chrono::{Months, NaiveDate, NaiveTime, Utc};
use tracing::{debug, info, warn};
use uuid::Uuid;

use shared_database::{ClinicDb, StoreError};
use shared_models::appointment::{Appointment, AppointmentStatus, CancelledBy};
use shared_models::hhmm;

use crate::models::{
    AppointmentError, AppointmentListQuery, BookAppointmentRequest, CancelAppointmentRequest,
    DoctorAppointmentsQuery, PagedAppointments, RescheduleAppointmentRequest,
    UpdateAppointmentRequest,
};
use crate::services::lifecycle::LifecycleService;

/// Bookings may be placed at most this far ahead.
const BOOKING_HORIZON_MONTHS: u32 = 3;

pub struct BookingService {
    db: Arc<ClinicDb>,
    lifecycle: LifecycleService,
}

impl BookingService {
    pub fn new(db: Arc<ClinicDb>) -> Self {
        Self {
            db,
            lifecycle: LifecycleService::new(),
        }
    }

    /// Book a slot. Preconditions: active doctor, active service, well-formed
    /// time, start in the future and inside the booking horizon. The amount is
    /// the service's minimum price-range bound and the duration is copied from
    /// the service definition.
    pub async fn book(
        &self,
        request: BookAppointmentRequest,
    ) -> Result<Appointment, AppointmentError> {
        let time = parse_time(&request.time)?;

        let doctor = self
            .db
            .find_doctor(request.doctor_id)
            .await
            .filter(|doctor| doctor.is_active)
            .ok_or(AppointmentError::DoctorNotFound)?;
        let service = self
            .db
            .find_service(request.service_id)
            .await
            .filter(|service| service.is_active)
            .ok_or(AppointmentError::ServiceNotFound)?;

        let now = Utc::now();
        self.validate_booking_window(request.date, time, now)?;

        let appointment = Appointment {
            id: Uuid::new_v4(),
            patient_name: request.patient_name,
            patient_email: request.patient_email,
            patient_phone: request.patient_phone,
            doctor_id: doctor.id,
            service_id: service.id,
            date: request.date,
            time,
            status: AppointmentStatus::Scheduled,
            kind: request.kind.unwrap_or_default(),
            duration_minutes: service.duration_minutes,
            amount: service.price_range.min,
            notes: request.notes,
            symptoms: request.symptoms,
            cancellation_reason: None,
            cancelled_by: None,
            cancelled_at: None,
            created_at: now,
            updated_at: now,
        };

        let booked = self
            .db
            .insert_appointment(appointment)
            .await
            .map_err(map_store_error)?;

        info!(
            "Appointment {} booked with doctor {} on {} at {}",
            booked.id,
            booked.doctor_id,
            booked.date,
            hhmm::format(booked.time)
        );
        Ok(booked)
    }

    pub async fn get(&self, id: Uuid) -> Result<Appointment, AppointmentError> {
        self.db
            .find_appointment(id)
            .await
            .ok_or(AppointmentError::NotFound)
    }

    pub async fn list(&self, query: AppointmentListQuery) -> PagedAppointments {
        let rows = self.db.list_appointments(query.status).await;
        paginate(rows, query.page, query.limit)
    }

    pub async fn doctor_appointments(
        &self,
        doctor_id: Uuid,
        query: DoctorAppointmentsQuery,
    ) -> PagedAppointments {
        let rows = self
            .db
            .doctor_appointments(doctor_id, query.date, query.status)
            .await;
        paginate(rows, query.page, query.limit)
    }

    /// Administrative update: status transition (lifecycle-validated) and/or
    /// notes. A cancellation through this path is subject to the same 24-hour
    /// window as the dedicated cancel operation.
    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateAppointmentRequest,
    ) -> Result<Appointment, AppointmentError> {
        let current = self.get(id).await?;

        if let Some(next) = request.status {
            self.lifecycle.validate_transition(current.status, next)?;
            if next == AppointmentStatus::Cancelled && !current.can_be_cancelled(Utc::now()) {
                return Err(AppointmentError::CancellationWindow);
            }
        }

        let updated = self
            .db
            .update_appointment(id, |apt| {
                if let Some(next) = request.status {
                    apt.status = next;
                    if next == AppointmentStatus::Cancelled {
                        apt.cancelled_by = Some(CancelledBy::Admin);
                        apt.cancelled_at = Some(Utc::now());
                    }
                }
                if let Some(notes) = request.notes {
                    apt.notes = Some(notes);
                }
            })
            .await
            .map_err(map_store_error)?;

        debug!("Appointment {} updated to status {}", id, updated.status);
        Ok(updated)
    }

    /// Cancel, releasing the slot. Permitted only while more than 24 hours
    /// remain before the scheduled start and the appointment still holds its
    /// slot.
    pub async fn cancel(
        &self,
        id: Uuid,
        request: CancelAppointmentRequest,
    ) -> Result<Appointment, AppointmentError> {
        let current = self.get(id).await?;

        if !current.can_be_cancelled(Utc::now()) {
            warn!(
                "Cancellation refused for appointment {} ({} at {}, status {})",
                id,
                current.date,
                hhmm::format(current.time),
                current.status
            );
            return Err(AppointmentError::CancellationWindow);
        }

        let cancelled = self
            .db
            .update_appointment(id, |apt| {
                apt.status = AppointmentStatus::Cancelled;
                apt.cancellation_reason = Some(request.reason);
                apt.cancelled_by = Some(request.cancelled_by.unwrap_or(CancelledBy::Admin));
                apt.cancelled_at = Some(Utc::now());
            })
            .await
            .map_err(map_store_error)?;

        info!("Appointment {} cancelled", id);
        Ok(cancelled)
    }

    /// Move to a new slot. The conflict check excludes the appointment's own
    /// key, so rescheduling onto the identical slot succeeds. Status resets to
    /// scheduled; allowed from any non-terminal status. On conflict the
    /// original record is untouched.
    pub async fn reschedule(
        &self,
        id: Uuid,
        request: RescheduleAppointmentRequest,
    ) -> Result<Appointment, AppointmentError> {
        let time = parse_time(&request.time)?;
        let current = self.get(id).await?;

        if !self.lifecycle.can_reschedule(current.status) {
            return Err(AppointmentError::Validation(format!(
                "cannot reschedule a {} appointment",
                current.status
            )));
        }

        let starts_at = request.date.and_time(time).and_utc();
        if starts_at <= Utc::now() {
            return Err(AppointmentError::Validation(
                "rescheduled time must be in the future".to_string(),
            ));
        }

        let moved = self
            .db
            .move_appointment(id, request.date, time)
            .await
            .map_err(map_store_error)?;

        info!(
            "Appointment {} rescheduled to {} at {}",
            id,
            moved.date,
            hhmm::format(moved.time)
        );
        Ok(moved)
    }

    fn validate_booking_window(
        &self,
        date: NaiveDate,
        time: NaiveTime,
        now: chrono::DateTime<Utc>,
    ) -> Result<(), AppointmentError> {
        let starts_at = date.and_time(time).and_utc();
        if starts_at <= now {
            return Err(AppointmentError::Validation(
                "appointment date and time must be in the future".to_string(),
            ));
        }

        let horizon = now
            .date_naive()
            .checked_add_months(Months::new(BOOKING_HORIZON_MONTHS))
            .unwrap_or(NaiveDate::MAX);
        if date > horizon {
            return Err(AppointmentError::Validation(format!(
                "appointments cannot be booked more than {} months in advance",
                BOOKING_HORIZON_MONTHS
            )));
        }

        Ok(())
    }
}

fn parse_time(raw: &str) -> Result<NaiveTime, AppointmentError> {
    hhmm::parse(raw).ok_or_else(|| AppointmentError::InvalidTime(raw.to_string()))
}

fn map_store_error(err: StoreError) -> AppointmentError {
    match err {
        StoreError::SlotHeld { .. } => AppointmentError::SlotConflict,
        StoreError::NotFound => AppointmentError::NotFound,
    }
}

fn paginate(rows: Vec<Appointment>, page: Option<usize>, limit: Option<usize>) -> PagedAppointments {
    let page = page.unwrap_or(1).max(1);
    let limit = limit.unwrap_or(10).max(1);
    let total = rows.len();
    let total_pages = total.div_ceil(limit);
    let appointments: Vec<Appointment> = rows
        .into_iter()
        .skip((page - 1) * limit)
        .take(limit)
        .collect();

    PagedAppointments {
        appointments,
        total,
        total_pages,
        current_page: page,
    }
}
