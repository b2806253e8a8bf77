pub mod appointment;
pub mod doctor;
pub mod enums;
pub mod filters;
pub mod patient;

pub use appointment::*;
pub use doctor::*;
pub use enums::*;
pub use filters::*;
pub use patient::*;

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },

    #[error("Invalid status transition: {from} -> {to}")]
    InvalidTransition {
        from: AppointmentStatus,
        to: AppointmentStatus,
    },
}

/// A uniquely identified record owned by the entity store.
pub trait Entity {
    /// Label used in logs and `NotFound` errors.
    const KIND: &'static str;

    fn id(&self) -> &str;
}

/// Parses `YYYY-M-D` with or without zero padding.
///
/// Used wherever a stored date string has to be read as a calendar date;
/// the stored string itself is never rewritten.
pub fn parse_calendar_date(s: &str) -> Option<NaiveDate> {
    let mut parts = s.trim().splitn(3, '-');
    let year = digits(parts.next()?)?.parse::<i32>().ok()?;
    let month = digits(parts.next()?)?.parse::<u32>().ok()?;
    let day = digits(parts.next()?)?.parse::<u32>().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// `str::parse` accepts a leading `+`; date parts must be plain digits.
fn digits(part: &str) -> Option<&str> {
    (!part.is_empty() && part.bytes().all(|b| b.is_ascii_digit())).then_some(part)
}
