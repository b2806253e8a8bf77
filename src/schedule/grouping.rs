use std::collections::BTreeMap;

use crate::config::{DateMatching, DEFAULT_INLINE_LIMIT};
use crate::models::Appointment;

use super::types::DateSummary;

/// Appointments whose `date` equals `date` exactly, in store order.
pub fn by_date<'a>(appointments: &'a [Appointment], date: &str) -> Vec<&'a Appointment> {
    by_date_with(appointments, date, DateMatching::Exact)
}

pub fn by_date_with<'a>(
    appointments: &'a [Appointment],
    date: &str,
    matching: DateMatching,
) -> Vec<&'a Appointment> {
    appointments
        .iter()
        .filter(|a| matching.matches(&a.date, date))
        .collect()
}

/// Count and "+N more" overflow for one date, two entries shown inline.
pub fn summarize(appointments: &[Appointment], date: &str) -> DateSummary {
    summarize_with(appointments, date, DateMatching::Exact, DEFAULT_INLINE_LIMIT)
}

pub fn summarize_with(
    appointments: &[Appointment],
    date: &str,
    matching: DateMatching,
    inline_limit: usize,
) -> DateSummary {
    let count = appointments
        .iter()
        .filter(|a| matching.matches(&a.date, date))
        .count();
    DateSummary::from_count(count, inline_limit)
}

/// All appointments bucketed by their stored date string.
/// Keys sort lexically; buckets keep store order.
pub fn group_by_date(appointments: &[Appointment]) -> BTreeMap<&str, Vec<&Appointment>> {
    let mut groups: BTreeMap<&str, Vec<&Appointment>> = BTreeMap::new();
    for appt in appointments {
        groups.entry(appt.date.as_str()).or_default().push(appt);
    }
    groups
}
