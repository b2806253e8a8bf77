use serde::Serialize;

use crate::models::Appointment;

/// Per-date count plus how many entries do not fit inline in a calendar cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DateSummary {
    pub count: usize,
    pub overflow_count: usize,
}

impl DateSummary {
    pub fn from_count(count: usize, inline_limit: usize) -> Self {
        Self {
            count,
            overflow_count: count.saturating_sub(inline_limit),
        }
    }
}

/// One day of the month grid.
#[derive(Debug, Clone, Serialize)]
pub struct CalendarCell<'a> {
    pub date: String, // zero-padded YYYY-MM-DD
    pub day: u32,
    pub preview: Vec<&'a Appointment>,
    pub summary: DateSummary,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthGrid<'a> {
    pub year: i32,
    pub month: u32,
    /// Empty cells before day 1 in a Sunday-first week row.
    pub leading_blank_days: u32,
    pub cells: Vec<CalendarCell<'a>>,
}

/// Appointments that share a patient and a (date, time) slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleConflict {
    pub patient_id: String,
    pub date: String,
    pub time: String,
    pub appointment_ids: Vec<String>,
}
