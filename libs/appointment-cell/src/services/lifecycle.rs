//! Appointment status state machine.
//!
//! ```text
//! scheduled -> confirmed -> in-progress -> completed
//! scheduled/confirmed -> cancelled | no-show
//! any non-terminal --reschedule--> scheduled
//! ```
//!
//! Completed, cancelled and no-show are terminal. Rescheduling is handled by
//! the booking service and is the only path that re-enters `scheduled`.

use tracing::{debug, warn};

use shared_models::appointment::AppointmentStatus;

use crate::models::AppointmentError;

pub struct LifecycleService;

impl LifecycleService {
    pub fn new() -> Self {
        Self
    }

    pub fn valid_transitions(&self, current: AppointmentStatus) -> Vec<AppointmentStatus> {
        match current {
            AppointmentStatus::Scheduled => vec![
                AppointmentStatus::Confirmed,
                AppointmentStatus::Cancelled,
                AppointmentStatus::NoShow,
            ],
            AppointmentStatus::Confirmed => vec![
                AppointmentStatus::InProgress,
                AppointmentStatus::Cancelled,
                AppointmentStatus::NoShow,
            ],
            AppointmentStatus::InProgress => vec![AppointmentStatus::Completed],
            AppointmentStatus::Completed
            | AppointmentStatus::Cancelled
            | AppointmentStatus::NoShow => vec![],
        }
    }

    pub fn validate_transition(
        &self,
        current: AppointmentStatus,
        next: AppointmentStatus,
    ) -> Result<(), AppointmentError> {
        if !self.valid_transitions(current).contains(&next) {
            warn!("invalid status transition attempted: {} -> {}", current, next);
            return Err(AppointmentError::InvalidTransition {
                from: current,
                to: next,
            });
        }
        debug!("status transition validated: {} -> {}", current, next);
        Ok(())
    }

    /// Rescheduling re-enters the pipeline from any non-terminal status.
    pub fn can_reschedule(&self, current: AppointmentStatus) -> bool {
        !current.is_terminal()
    }
}

impl Default for LifecycleService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn happy_path_runs_to_completed() {
        let lifecycle = LifecycleService::new();
        lifecycle
            .validate_transition(AppointmentStatus::Scheduled, AppointmentStatus::Confirmed)
            .unwrap();
        lifecycle
            .validate_transition(AppointmentStatus::Confirmed, AppointmentStatus::InProgress)
            .unwrap();
        lifecycle
            .validate_transition(AppointmentStatus::InProgress, AppointmentStatus::Completed)
            .unwrap();
    }

    #[test]
    fn terminal_states_have_no_exits() {
        let lifecycle = LifecycleService::new();
        for terminal in [
            AppointmentStatus::Completed,
            AppointmentStatus::Cancelled,
            AppointmentStatus::NoShow,
        ] {
            assert!(lifecycle.valid_transitions(terminal).is_empty());
            assert_matches!(
                lifecycle.validate_transition(terminal, AppointmentStatus::Scheduled),
                Err(AppointmentError::InvalidTransition { .. })
            );
        }
    }

    #[test]
    fn skipping_confirmation_is_rejected() {
        let lifecycle = LifecycleService::new();
        assert_matches!(
            lifecycle.validate_transition(AppointmentStatus::Scheduled, AppointmentStatus::InProgress),
            Err(AppointmentError::InvalidTransition { .. })
        );
        assert_matches!(
            lifecycle.validate_transition(AppointmentStatus::Scheduled, AppointmentStatus::Completed),
            Err(AppointmentError::InvalidTransition { .. })
        );
    }

    #[test]
    fn reschedule_allowed_only_before_terminal() {
        let lifecycle = LifecycleService::new();
        assert!(lifecycle.can_reschedule(AppointmentStatus::Scheduled));
        assert!(lifecycle.can_reschedule(AppointmentStatus::Confirmed));
        assert!(lifecycle.can_reschedule(AppointmentStatus::InProgress));
        assert!(!lifecycle.can_reschedule(AppointmentStatus::Completed));
        assert!(!lifecycle.can_reschedule(AppointmentStatus::Cancelled));
        assert!(!lifecycle.can_reschedule(AppointmentStatus::NoShow));
    }
}
