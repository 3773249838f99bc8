//! In-process clinic store.
//!
//! All tables live behind a single `RwLock`. Appointment writes that touch a
//! slot run check-and-write inside one write-lock critical section, so the
//! "at most one active appointment per (doctor, date, time)" invariant cannot
//! be violated by concurrent bookings: the slot ledger either admits the
//! write or rejects it with [`StoreError::SlotHeld`].

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveTime, Utc};
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use shared_models::appointment::{Appointment, AppointmentStatus};
use shared_models::contact::{Contact, ContactStatus};
use shared_models::doctor::{Doctor, Specialty};
use shared_models::service::Service;

/// The unit of bookability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotKey {
    pub doctor_id: Uuid,
    pub date: NaiveDate,
    pub time: NaiveTime,
}

impl SlotKey {
    pub fn of(appointment: &Appointment) -> Self {
        Self {
            doctor_id: appointment.doctor_id,
            date: appointment.date,
            time: appointment.time,
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("slot {time} on {date} is already held for doctor {doctor_id}")]
    SlotHeld {
        doctor_id: Uuid,
        date: NaiveDate,
        time: NaiveTime,
    },

    #[error("record not found")]
    NotFound,
}

#[derive(Default)]
struct Tables {
    appointments: HashMap<Uuid, Appointment>,
    /// Active holder per slot. A key is present exactly while its appointment
    /// has status scheduled or confirmed.
    slots: HashMap<SlotKey, Uuid>,
    doctors: HashMap<Uuid, Doctor>,
    services: HashMap<Uuid, Service>,
    contacts: HashMap<Uuid, Contact>,
}

#[derive(Default)]
pub struct ClinicDb {
    inner: RwLock<Tables>,
}

impl ClinicDb {
    pub fn new() -> Self {
        Self::default()
    }

    // ==========================================================================
    // APPOINTMENTS
    // ==========================================================================

    /// Reserve-or-fail insert. If the appointment arrives with an active
    /// status, the slot ledger is checked and claimed atomically.
    pub async fn insert_appointment(
        &self,
        appointment: Appointment,
    ) -> Result<Appointment, StoreError> {
        let mut tables = self.inner.write().await;
        let key = SlotKey::of(&appointment);

        if appointment.status.is_active() {
            if let Some(holder) = tables.slots.get(&key) {
                debug!(
                    "slot {:?} refused: already held by appointment {}",
                    key, holder
                );
                return Err(StoreError::SlotHeld {
                    doctor_id: key.doctor_id,
                    date: key.date,
                    time: key.time,
                });
            }
            tables.slots.insert(key, appointment.id);
        }

        tables.appointments.insert(appointment.id, appointment.clone());
        Ok(appointment)
    }

    pub async fn find_appointment(&self, id: Uuid) -> Option<Appointment> {
        self.inner.read().await.appointments.get(&id).cloned()
    }

    /// Point lookup on the slot ledger, optionally ignoring one appointment
    /// (used by reschedule so a booking never conflicts with itself).
    pub async fn is_slot_taken(
        &self,
        doctor_id: Uuid,
        date: NaiveDate,
        time: NaiveTime,
        exclude: Option<Uuid>,
    ) -> bool {
        let tables = self.inner.read().await;
        match tables.slots.get(&SlotKey { doctor_id, date, time }) {
            Some(holder) => exclude != Some(*holder),
            None => false,
        }
    }

    /// Times held by active appointments for a doctor's day, straight off the
    /// ledger.
    pub async fn held_times(&self, doctor_id: Uuid, date: NaiveDate) -> Vec<NaiveTime> {
        let tables = self.inner.read().await;
        tables
            .slots
            .keys()
            .filter(|key| key.doctor_id == doctor_id && key.date == date)
            .map(|key| key.time)
            .collect()
    }

    /// All appointments, newest day first, optionally filtered by status.
    pub async fn list_appointments(
        &self,
        status: Option<AppointmentStatus>,
    ) -> Vec<Appointment> {
        let tables = self.inner.read().await;
        let mut rows: Vec<Appointment> = tables
            .appointments
            .values()
            .filter(|apt| status.map_or(true, |wanted| apt.status == wanted))
            .cloned()
            .collect();
        rows.sort_by_key(|apt| std::cmp::Reverse((apt.date, apt.time)));
        rows
    }

    /// A doctor's appointments in day order, with optional date/status filters.
    pub async fn doctor_appointments(
        &self,
        doctor_id: Uuid,
        date: Option<NaiveDate>,
        status: Option<AppointmentStatus>,
    ) -> Vec<Appointment> {
        let tables = self.inner.read().await;
        let mut rows: Vec<Appointment> = tables
            .appointments
            .values()
            .filter(|apt| apt.doctor_id == doctor_id)
            .filter(|apt| date.map_or(true, |day| apt.date == day))
            .filter(|apt| status.map_or(true, |wanted| apt.status == wanted))
            .cloned()
            .collect();
        rows.sort_by_key(|apt| (apt.date, apt.time));
        rows
    }

    /// Apply an in-place patch and re-sync the slot ledger. The patch must not
    /// change `date` or `time`; slot moves go through [`Self::move_appointment`].
    pub async fn update_appointment<F>(&self, id: Uuid, patch: F) -> Result<Appointment, StoreError>
    where
        F: FnOnce(&mut Appointment),
    {
        let mut tables = self.inner.write().await;
        let appointment = tables.appointments.get_mut(&id).ok_or(StoreError::NotFound)?;

        patch(appointment);
        appointment.updated_at = Utc::now();

        let key = SlotKey::of(appointment);
        let still_active = appointment.status.is_active();
        let updated = appointment.clone();

        if still_active {
            tables.slots.insert(key, id);
        } else if tables.slots.get(&key) == Some(&id) {
            tables.slots.remove(&key);
        }

        Ok(updated)
    }

    /// Move an appointment to a new slot: claim the target key (self-conflict
    /// excluded), release the old one, and reset status to scheduled, all
    /// under one write lock.
    pub async fn move_appointment(
        &self,
        id: Uuid,
        new_date: NaiveDate,
        new_time: NaiveTime,
    ) -> Result<Appointment, StoreError> {
        let mut tables = self.inner.write().await;

        let new_key = SlotKey {
            doctor_id: tables
                .appointments
                .get(&id)
                .ok_or(StoreError::NotFound)?
                .doctor_id,
            date: new_date,
            time: new_time,
        };

        if let Some(holder) = tables.slots.get(&new_key) {
            if *holder != id {
                return Err(StoreError::SlotHeld {
                    doctor_id: new_key.doctor_id,
                    date: new_key.date,
                    time: new_key.time,
                });
            }
        }

        let appointment = tables
            .appointments
            .get_mut(&id)
            .ok_or(StoreError::NotFound)?;
        let old_key = SlotKey::of(appointment);

        appointment.date = new_date;
        appointment.time = new_time;
        appointment.status = AppointmentStatus::Scheduled;
        appointment.updated_at = Utc::now();
        let moved = appointment.clone();

        if tables.slots.get(&old_key) == Some(&id) {
            tables.slots.remove(&old_key);
        }
        tables.slots.insert(new_key, id);

        Ok(moved)
    }

    // ==========================================================================
    // DOCTORS
    // ==========================================================================

    pub async fn insert_doctor(&self, doctor: Doctor) -> Doctor {
        let mut tables = self.inner.write().await;
        tables.doctors.insert(doctor.id, doctor.clone());
        doctor
    }

    pub async fn find_doctor(&self, id: Uuid) -> Option<Doctor> {
        self.inner.read().await.doctors.get(&id).cloned()
    }

    pub async fn list_doctors(&self, specialty: Option<Specialty>) -> Vec<Doctor> {
        let tables = self.inner.read().await;
        let mut rows: Vec<Doctor> = tables
            .doctors
            .values()
            .filter(|doctor| specialty.map_or(true, |wanted| doctor.specialty == wanted))
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        rows
    }

    pub async fn update_doctor<F>(&self, id: Uuid, patch: F) -> Result<Doctor, StoreError>
    where
        F: FnOnce(&mut Doctor),
    {
        let mut tables = self.inner.write().await;
        let doctor = tables.doctors.get_mut(&id).ok_or(StoreError::NotFound)?;
        patch(doctor);
        Ok(doctor.clone())
    }

    pub async fn delete_doctor(&self, id: Uuid) -> Result<Doctor, StoreError> {
        let mut tables = self.inner.write().await;
        tables.doctors.remove(&id).ok_or(StoreError::NotFound)
    }

    // ==========================================================================
    // SERVICES
    // ==========================================================================

    pub async fn insert_service(&self, service: Service) -> Service {
        let mut tables = self.inner.write().await;
        tables.services.insert(service.id, service.clone());
        service
    }

    pub async fn find_service(&self, id: Uuid) -> Option<Service> {
        self.inner.read().await.services.get(&id).cloned()
    }

    pub async fn list_services(&self) -> Vec<Service> {
        let tables = self.inner.read().await;
        let mut rows: Vec<Service> = tables.services.values().cloned().collect();
        rows.sort_by(|a, b| {
            b.is_popular
                .cmp(&a.is_popular)
                .then_with(|| a.name.cmp(&b.name))
        });
        rows
    }

    pub async fn update_service<F>(&self, id: Uuid, patch: F) -> Result<Service, StoreError>
    where
        F: FnOnce(&mut Service),
    {
        let mut tables = self.inner.write().await;
        let service = tables.services.get_mut(&id).ok_or(StoreError::NotFound)?;
        patch(service);
        Ok(service.clone())
    }

    pub async fn delete_service(&self, id: Uuid) -> Result<Service, StoreError> {
        let mut tables = self.inner.write().await;
        tables.services.remove(&id).ok_or(StoreError::NotFound)
    }

    // ==========================================================================
    // CONTACTS
    // ==========================================================================

    pub async fn insert_contact(&self, contact: Contact) -> Contact {
        let mut tables = self.inner.write().await;
        tables.contacts.insert(contact.id, contact.clone());
        contact
    }

    pub async fn find_contact(&self, id: Uuid) -> Option<Contact> {
        self.inner.read().await.contacts.get(&id).cloned()
    }

    pub async fn list_contacts(&self, status: Option<ContactStatus>) -> Vec<Contact> {
        let tables = self.inner.read().await;
        let mut rows: Vec<Contact> = tables
            .contacts
            .values()
            .filter(|contact| status.map_or(true, |wanted| contact.status == wanted))
            .cloned()
            .collect();
        rows.sort_by_key(|contact| std::cmp::Reverse(contact.created_at));
        rows
    }

    pub async fn update_contact<F>(&self, id: Uuid, patch: F) -> Result<Contact, StoreError>
    where
        F: FnOnce(&mut Contact),
    {
        let mut tables = self.inner.write().await;
        let contact = tables.contacts.get_mut(&id).ok_or(StoreError::NotFound)?;
        patch(contact);
        contact.updated_at = Utc::now();
        Ok(contact.clone())
    }
}
