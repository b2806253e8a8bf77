//! Read-side facade over the registry.
//!
//! Every method borrows the current snapshot and never fails: an empty
//! result is the only "not found" signal.

use serde::Serialize;

use crate::models::{
    Appointment, AppointmentFilter, AppointmentStatus, AppointmentType, Patient, PatientFilter,
};
use crate::schedule::{self, DateSummary, MonthGrid, ScheduleConflict};
use crate::search;
use crate::store::Registry;

/// Appointment joined with display names resolved from the referenced
/// records. The cached copy on the appointment is used only when the
/// reference does not resolve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentView {
    pub id: String,
    pub patient_id: String,
    pub patient_name: String,
    pub doctor_id: String,
    pub doctor_name: String,
    pub date: String,
    pub time: String,
    #[serde(rename = "type")]
    pub appointment_type: AppointmentType,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
}

impl Registry {
    /// Patients whose first or last name contains `term`, in store order.
    pub fn search_patients(&self, term: &str) -> Vec<&Patient> {
        let found = search::search(self.patients().all(), term);
        tracing::debug!(term, hits = found.len(), "patient search");
        found
    }

    pub fn filter_patients(&self, filter: &PatientFilter) -> Vec<&Patient> {
        filter.apply(self.patients().all())
    }

    /// Appointments on `date`, in store order.
    pub fn schedule_for_date(&self, date: &str) -> Vec<&Appointment> {
        schedule::by_date_with(self.appointments().all(), date, self.config().date_matching)
    }

    pub fn summarize_date(&self, date: &str) -> DateSummary {
        let config = self.config();
        schedule::summarize_with(
            self.appointments().all(),
            date,
            config.date_matching,
            config.inline_limit,
        )
    }

    pub fn filter_appointments(&self, filter: &AppointmentFilter) -> Vec<&Appointment> {
        filter.apply(self.appointments().all(), self.config().date_matching)
    }

    pub fn month_grid(&self, year: i32, month: u32) -> MonthGrid<'_> {
        schedule::month_grid(self.appointments().all(), year, month, self.config())
    }

    pub fn find_conflicts(&self) -> Vec<ScheduleConflict> {
        schedule::find_conflicts(self.appointments().all())
    }

    pub fn appointment_view(&self, appt: &Appointment) -> AppointmentView {
        let patient_name = self
            .patients()
            .get(&appt.patient_id)
            .map(Patient::full_name)
            .unwrap_or_else(|| appt.patient_name.clone());
        let doctor_name = self
            .doctors()
            .get(&appt.doctor_id)
            .map(|d| d.name.clone())
            .unwrap_or_else(|| appt.doctor_name.clone());

        AppointmentView {
            id: appt.id.clone(),
            patient_id: appt.patient_id.clone(),
            patient_name,
            doctor_id: appt.doctor_id.clone(),
            doctor_name,
            date: appt.date.clone(),
            time: appt.time.clone(),
            appointment_type: appt.appointment_type,
            status: appt.status,
            notes: appt.notes.clone(),
        }
    }

    /// Schedule side panel: the day's appointments with resolved names.
    pub fn appointment_views_for_date(&self, date: &str) -> Vec<AppointmentView> {
        self.schedule_for_date(date)
            .into_iter()
            .map(|a| self.appointment_view(a))
            .collect()
    }
}
