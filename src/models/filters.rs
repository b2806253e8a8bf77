use super::enums::{AppointmentStatus, Gender, PatientStatus};

/// Patient list filter. `term` is matched against first and last name.
#[derive(Debug, Default, Clone)]
pub struct PatientFilter {
    pub term: Option<String>,
    pub status: Option<PatientStatus>,
    pub gender: Option<Gender>,
}

#[derive(Debug, Default, Clone)]
pub struct AppointmentFilter {
    pub date: Option<String>,
    pub patient_id: Option<String>,
    pub doctor_id: Option<String>,
    pub status: Option<AppointmentStatus>,
}
