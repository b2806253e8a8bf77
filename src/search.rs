//! Predicate engine: name search and equality filters over stored entities.
//!
//! Name search is case-insensitive substring-anywhere, OR across first and
//! last name. An empty term matches every patient.

use crate::config::DateMatching;
use crate::models::{Appointment, AppointmentFilter, Patient, PatientFilter};

/// True iff `term` (case-folded) occurs in the patient's first or last name.
pub fn matches(patient: &Patient, term: &str) -> bool {
    matches_folded(patient, &term.to_lowercase())
}

fn matches_folded(patient: &Patient, needle: &str) -> bool {
    needle.is_empty()
        || patient.first_name.to_lowercase().contains(needle)
        || patient.last_name.to_lowercase().contains(needle)
}

/// Patients matching `term`, in the order given.
pub fn search<'a>(patients: &'a [Patient], term: &str) -> Vec<&'a Patient> {
    let needle = term.to_lowercase();
    patients
        .iter()
        .filter(|p| matches_folded(p, &needle))
        .collect()
}

impl PatientFilter {
    pub fn matches(&self, patient: &Patient) -> bool {
        if let Some(ref term) = self.term {
            if !matches(patient, term) {
                return false;
            }
        }
        if let Some(status) = self.status {
            if patient.status != status {
                return false;
            }
        }
        if let Some(gender) = self.gender {
            if patient.gender != gender {
                return false;
            }
        }
        true
    }

    pub fn apply<'a>(&self, patients: &'a [Patient]) -> Vec<&'a Patient> {
        patients.iter().filter(|p| self.matches(p)).collect()
    }
}

impl AppointmentFilter {
    pub fn matches(&self, appt: &Appointment, dates: DateMatching) -> bool {
        if let Some(ref date) = self.date {
            if !dates.matches(&appt.date, date) {
                return false;
            }
        }
        if let Some(ref patient_id) = self.patient_id {
            if &appt.patient_id != patient_id {
                return false;
            }
        }
        if let Some(ref doctor_id) = self.doctor_id {
            if &appt.doctor_id != doctor_id {
                return false;
            }
        }
        if let Some(status) = self.status {
            if appt.status != status {
                return false;
            }
        }
        true
    }

    pub fn apply<'a>(&self, appointments: &'a [Appointment], dates: DateMatching) -> Vec<&'a Appointment> {
        appointments
            .iter()
            .filter(|a| self.matches(a, dates))
            .collect()
    }
}
