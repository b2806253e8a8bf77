use serde::{Deserialize, Serialize};

use super::enums::{AppointmentStatus, AppointmentType};
use super::{Entity, ModelError};

/// A booked slot. `patient_name` and `doctor_name` are cached display copies;
/// the referenced records are authoritative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub patient_id: String,
    pub patient_name: String,
    pub doctor_id: String,
    pub doctor_name: String,
    pub date: String, // YYYY-MM-DD
    pub time: String, // HH:MM
    #[serde(rename = "type")]
    pub appointment_type: AppointmentType,
    pub status: AppointmentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Appointment {
    /// Moves this appointment to `next`, leaving it untouched on error.
    pub fn transition_to(&mut self, next: AppointmentStatus) -> Result<(), ModelError> {
        self.status = self.status.transition(next)?;
        Ok(())
    }
}

impl Entity for Appointment {
    const KIND: &'static str = "appointment";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Default for AppointmentStatus {
    fn default() -> Self {
        Self::Scheduled
    }
}

impl AppointmentStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    /// Scheduled -> Completed and Scheduled -> Cancelled are the only edges.
    pub fn can_transition_to(&self, next: AppointmentStatus) -> bool {
        matches!(
            (*self, next),
            (Self::Scheduled, Self::Completed) | (Self::Scheduled, Self::Cancelled)
        )
    }

    pub fn transition(self, next: AppointmentStatus) -> Result<AppointmentStatus, ModelError> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(ModelError::InvalidTransition { from: self, to: next })
        }
    }
}

#[cfg(test)]
pub(crate) fn sample_appointment(id: &str, patient_id: &str, date: &str, time: &str) -> Appointment {
    Appointment {
        id: id.into(),
        patient_id: patient_id.into(),
        patient_name: format!("Patient {patient_id}"),
        doctor_id: "d1".into(),
        doctor_name: "Dr. Test".into(),
        date: date.into(),
        time: time.into(),
        appointment_type: AppointmentType::Checkup,
        status: AppointmentStatus::Scheduled,
        notes: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [AppointmentStatus; 3] = [
        AppointmentStatus::Scheduled,
        AppointmentStatus::Completed,
        AppointmentStatus::Cancelled,
    ];

    #[test]
    fn initial_status_is_scheduled() {
        assert_eq!(AppointmentStatus::default(), AppointmentStatus::Scheduled);
        assert!(!AppointmentStatus::Scheduled.is_terminal());
    }

    #[test]
    fn scheduled_moves_only_to_completed_or_cancelled() {
        let from = AppointmentStatus::Scheduled;
        assert_eq!(from.transition(AppointmentStatus::Completed), Ok(AppointmentStatus::Completed));
        assert_eq!(from.transition(AppointmentStatus::Cancelled), Ok(AppointmentStatus::Cancelled));
        assert_eq!(
            from.transition(AppointmentStatus::Scheduled),
            Err(ModelError::InvalidTransition { from, to: from })
        );
    }

    #[test]
    fn terminal_states_reject_every_transition() {
        for from in [AppointmentStatus::Completed, AppointmentStatus::Cancelled] {
            assert!(from.is_terminal());
            for to in ALL {
                assert_eq!(
                    from.transition(to),
                    Err(ModelError::InvalidTransition { from, to }),
                    "{from} -> {to} should be rejected"
                );
            }
        }
    }

    #[test]
    fn failed_transition_leaves_appointment_unchanged() {
        let mut appt = sample_appointment("1", "1", "2023-10-24", "09:00");
        appt.transition_to(AppointmentStatus::Cancelled).unwrap();
        assert_eq!(appt.status, AppointmentStatus::Cancelled);

        let err = appt.transition_to(AppointmentStatus::Completed).unwrap_err();
        assert!(matches!(err, ModelError::InvalidTransition { .. }));
        assert_eq!(appt.status, AppointmentStatus::Cancelled);
    }

    #[test]
    fn type_field_uses_console_name() {
        let appt = sample_appointment("7", "2", "2023-10-25", "11:00");
        let value = serde_json::to_value(&appt).unwrap();
        assert_eq!(value["type"], "Checkup");
        assert_eq!(value["patientId"], "2");
        assert!(value.get("notes").is_none());
    }
}
