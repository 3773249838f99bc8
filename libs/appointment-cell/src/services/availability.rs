//! Open-slot enumeration for a doctor's day.
//!
//! The grid is clinic-wide and fixed: half-hour slots from 09:00 inclusive to
//! 17:00 exclusive, sixteen per day. The per-doctor weekly schedule on the
//! doctor record is intentionally not consulted here, and a slot is one grid
//! cell regardless of the service duration booked into it.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use tracing::debug;
use uuid::Uuid;

use shared_database::ClinicDb;

use crate::models::AppointmentError;

const OPEN_HOUR: u32 = 9;
const CLOSE_HOUR: u32 = 17;
const SLOT_MINUTES: u32 = 30;

pub struct AvailabilityService {
    db: Arc<ClinicDb>,
}

impl AvailabilityService {
    pub fn new(db: Arc<ClinicDb>) -> Self {
        Self { db }
    }

    /// Every bookable time of a clinic day, ascending.
    pub fn slot_grid() -> Vec<NaiveTime> {
        let mut grid = Vec::new();
        for hour in OPEN_HOUR..CLOSE_HOUR {
            let mut minute = 0;
            while minute < 60 {
                if let Some(time) = NaiveTime::from_hms_opt(hour, minute, 0) {
                    grid.push(time);
                }
                minute += SLOT_MINUTES;
            }
        }
        grid
    }

    /// Whether an active appointment (scheduled or confirmed) already holds
    /// the slot. Cancelled, completed and no-show appointments never block.
    pub async fn is_slot_taken(&self, doctor_id: Uuid, date: NaiveDate, time: NaiveTime) -> bool {
        self.db.is_slot_taken(doctor_id, date, time, None).await
    }

    /// The grid minus slots held by active appointments, ascending.
    pub async fn open_slots(
        &self,
        doctor_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<NaiveTime>, AppointmentError> {
        self.db
            .find_doctor(doctor_id)
            .await
            .filter(|doctor| doctor.is_active)
            .ok_or(AppointmentError::DoctorNotFound)?;

        let held: HashSet<NaiveTime> = self.db.held_times(doctor_id, date).await.into_iter().collect();
        let open: Vec<NaiveTime> = Self::slot_grid()
            .into_iter()
            .filter(|slot| !held.contains(slot))
            .collect();

        debug!(
            "availability for doctor {} on {}: {} of {} slots open",
            doctor_id,
            date,
            open.len(),
            Self::slot_grid().len()
        );

        Ok(open)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_is_sixteen_half_hour_slots() {
        let grid = AvailabilityService::slot_grid();
        assert_eq!(grid.len(), 16);
        assert_eq!(grid.first(), NaiveTime::from_hms_opt(9, 0, 0).as_ref());
        assert_eq!(grid.last(), NaiveTime::from_hms_opt(16, 30, 0).as_ref());
    }

    #[test]
    fn grid_is_strictly_ascending() {
        let grid = AvailabilityService::slot_grid();
        assert!(grid.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn grid_excludes_the_closing_hour() {
        let grid = AvailabilityService::slot_grid();
        assert!(!grid.contains(&NaiveTime::from_hms_opt(17, 0, 0).unwrap()));
    }
}
