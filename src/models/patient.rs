use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::enums::{Gender, PatientStatus};
use super::{parse_calendar_date, Entity};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub dob: String, // YYYY-MM-DD
    pub gender: Gender,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub blood_type: String,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub allergies: BTreeSet<String>,
    pub last_visit: String, // YYYY-MM-DD
    pub status: PatientStatus,
}

impl Patient {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// First letter of each name part, as entered, for the avatar bubble.
    pub fn initials(&self) -> String {
        self.first_name
            .chars()
            .take(1)
            .chain(self.last_name.chars().take(1))
            .collect()
    }

    /// Completed years between `dob` and `on`. `None` if `dob` does not parse
    /// or lies after `on`.
    pub fn age_on(&self, on: NaiveDate) -> Option<u32> {
        let born = parse_calendar_date(&self.dob)?;
        if born > on {
            return None;
        }
        let mut years = on.year() - born.year();
        if (on.month(), on.day()) < (born.month(), born.day()) {
            years -= 1;
        }
        u32::try_from(years).ok()
    }

    pub fn is_active(&self) -> bool {
        self.status == PatientStatus::Active
    }
}

impl Entity for Patient {
    const KIND: &'static str = "patient";

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
pub(crate) fn sample_patient(id: &str, first: &str, last: &str) -> Patient {
    Patient {
        id: id.into(),
        first_name: first.into(),
        last_name: last.into(),
        dob: "1985-04-12".into(),
        gender: Gender::Other,
        email: format!("{}@example.com", first.to_lowercase()),
        phone: "+1 000 000 000".into(),
        address: "1 Test Rd".into(),
        blood_type: "O+".into(),
        allergies: BTreeSet::new(),
        last_visit: "2023-10-01".into(),
        status: PatientStatus::Active,
    }
}
