use std::collections::HashMap;

use crate::models::{Appointment, AppointmentStatus};

use super::types::ScheduleConflict;

/// Groups of live appointments booked for the same patient at the same
/// `(date, time)`. Cancelled appointments never conflict. Groups come out
/// in order of their first booking.
pub fn find_conflicts(appointments: &[Appointment]) -> Vec<ScheduleConflict> {
    let mut slots: HashMap<(&str, &str, &str), usize> = HashMap::new();
    let mut groups: Vec<ScheduleConflict> = Vec::new();

    for appt in appointments {
        if appt.status == AppointmentStatus::Cancelled {
            continue;
        }
        let key = (appt.patient_id.as_str(), appt.date.as_str(), appt.time.as_str());
        match slots.get(&key) {
            Some(&idx) => groups[idx].appointment_ids.push(appt.id.clone()),
            None => {
                slots.insert(key, groups.len());
                groups.push(ScheduleConflict {
                    patient_id: appt.patient_id.clone(),
                    date: appt.date.clone(),
                    time: appt.time.clone(),
                    appointment_ids: vec![appt.id.clone()],
                });
            }
        }
    }

    groups.retain(|g| g.appointment_ids.len() > 1);
    if !groups.is_empty() {
        tracing::warn!(conflicts = groups.len(), "double-booked patient slots found");
    }
    groups
}
