//! Dashboard overview: headline counts, demographics and the recent
//! appointments list, computed from the current snapshot.

use serde::Serialize;

use crate::config::DateMatching;
use crate::models::{parse_calendar_date, AppointmentStatus, Gender};
use crate::query::AppointmentView;
use crate::store::Registry;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenderBreakdown {
    pub male: usize,
    pub female: usize,
    pub other: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub scheduled: usize,
    pub completed: usize,
    pub cancelled: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardStats {
    pub total_patients: usize,
    pub active_patients: usize,
    pub appointments_on_date: usize,
    pub gender: GenderBreakdown,
    pub status_counts: StatusCounts,
    /// Latest date/time first.
    pub recent_appointments: Vec<AppointmentView>,
}

impl Registry {
    pub fn dashboard(&self, reference_date: &str, recent_limit: usize) -> DashboardStats {
        let patients = self.patients().all();

        let mut gender = GenderBreakdown::default();
        for p in patients {
            match p.gender {
                Gender::Male => gender.male += 1,
                Gender::Female => gender.female += 1,
                Gender::Other => gender.other += 1,
            }
        }

        let mut status_counts = StatusCounts::default();
        for a in self.appointments().all() {
            match a.status {
                AppointmentStatus::Scheduled => status_counts.scheduled += 1,
                AppointmentStatus::Completed => status_counts.completed += 1,
                AppointmentStatus::Cancelled => status_counts.cancelled += 1,
            }
        }

        // Stable sort: equal (date, time) keep store order. In calendar mode
        // unparseable dates sort last.
        let matching = self.config().date_matching;
        let mut recent: Vec<_> = self.appointments().all().iter().collect();
        recent.sort_by(|a, b| match matching {
            DateMatching::Exact => (&b.date, &b.time).cmp(&(&a.date, &a.time)),
            DateMatching::Calendar => (parse_calendar_date(&b.date), &b.time)
                .cmp(&(parse_calendar_date(&a.date), &a.time)),
        });
        let recent_appointments = recent
            .into_iter()
            .take(recent_limit)
            .map(|a| self.appointment_view(a))
            .collect();

        DashboardStats {
            total_patients: patients.len(),
            active_patients: patients.iter().filter(|p| p.is_active()).count(),
            appointments_on_date: self.summarize_date(reference_date).count,
            gender,
            status_counts,
            recent_appointments,
        }
    }
}
