use chrono::{Datelike, NaiveDate};

use crate::config::QueryConfig;
use crate::models::Appointment;

use super::grouping::by_date_with;
use super::types::{CalendarCell, DateSummary, MonthGrid};

/// Builds the calendar month view: one cell per day, each holding the
/// first `inline_limit` appointments and the overflow summary.
///
/// Cell keys are always zero-padded ISO dates. An invalid year/month
/// yields an empty grid.
pub fn month_grid<'a>(
    appointments: &'a [Appointment],
    year: i32,
    month: u32,
    config: &QueryConfig,
) -> MonthGrid<'a> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        tracing::debug!(year, month, "month grid requested for invalid month");
        return MonthGrid {
            year,
            month,
            leading_blank_days: 0,
            cells: Vec::new(),
        };
    };

    let cells = first
        .iter_days()
        .take_while(|d| d.month() == month)
        .map(|day| {
            let date = day.format("%Y-%m-%d").to_string();
            let matched = by_date_with(appointments, &date, config.date_matching);
            let summary = DateSummary::from_count(matched.len(), config.inline_limit);
            let preview = matched.into_iter().take(config.inline_limit).collect();
            CalendarCell {
                date,
                day: day.day(),
                preview,
                summary,
            }
        })
        .collect();

    MonthGrid {
        year,
        month,
        leading_blank_days: first.weekday().num_days_from_sunday(),
        cells,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DateMatching;
    use crate::models::appointment::sample_appointment;

    fn sample() -> Vec<Appointment> {
        vec![
            sample_appointment("1", "1", "2023-10-24", "09:00"),
            sample_appointment("2", "2", "2023-10-24", "10:30"),
            sample_appointment("3", "3", "2023-10-24", "14:00"),
            sample_appointment("4", "4", "2023-10-25", "11:00"),
            sample_appointment("5", "1", "2023-10-3", "08:00"),
        ]
    }

    #[test]
    fn october_2023_layout() {
        let appts = sample();
        let grid = month_grid(&appts, 2023, 10, &QueryConfig::default());
        assert_eq!(grid.cells.len(), 31);
        // 2023-10-01 was a Sunday
        assert_eq!(grid.leading_blank_days, 0);
        assert_eq!(grid.cells[0].date, "2023-10-01");
        assert_eq!(grid.cells[30].day, 31);
    }

    #[test]
    fn busy_day_shows_two_and_overflow() {
        let appts = sample();
        let grid = month_grid(&appts, 2023, 10, &QueryConfig::default());
        let cell = &grid.cells[23];
        assert_eq!(cell.date, "2023-10-24");
        let preview: Vec<&str> = cell.preview.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(preview, ["1", "2"]);
        assert_eq!(cell.summary, DateSummary { count: 3, overflow_count: 1 });
    }

    #[test]
    fn unpadded_dates_only_appear_in_calendar_mode() {
        let appts = sample();
        let exact = month_grid(&appts, 2023, 10, &QueryConfig::default());
        assert_eq!(exact.cells[2].summary.count, 0);

        let config = QueryConfig {
            date_matching: DateMatching::Calendar,
            ..QueryConfig::default()
        };
        let calendar = month_grid(&appts, 2023, 10, &config);
        assert_eq!(calendar.cells[2].summary.count, 1);
    }

    #[test]
    fn leap_february_and_offset() {
        let grid = month_grid(&[], 2024, 2, &QueryConfig::default());
        assert_eq!(grid.cells.len(), 29);
        // 2024-02-01 was a Thursday
        assert_eq!(grid.leading_blank_days, 4);
        assert!(grid.cells.iter().all(|c| c.summary.count == 0 && c.preview.is_empty()));
    }

    #[test]
    fn invalid_month_is_empty() {
        let grid = month_grid(&[], 2023, 13, &QueryConfig::default());
        assert!(grid.cells.is_empty());
        let grid = month_grid(&[], 2023, 0, &QueryConfig::default());
        assert!(grid.cells.is_empty());
    }
}
