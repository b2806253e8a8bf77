use serde::{Deserialize, Serialize};

use super::ModelError;

/// Macro to generate enum with as_str + std::str::FromStr pattern.
/// The string label doubles as the serde name so fixtures use console labels.
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ModelError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(Gender {
    Male => "Male",
    Female => "Female",
    Other => "Other",
});

str_enum!(PatientStatus {
    Active => "Active",
    Inactive => "Inactive",
});

str_enum!(AppointmentType {
    Checkup => "Checkup",
    Consultation => "Consultation",
    Emergency => "Emergency",
    FollowUp => "Follow-up",
});

str_enum!(AppointmentStatus {
    Scheduled => "Scheduled",
    Completed => "Completed",
    Cancelled => "Cancelled",
});

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn appointment_type_labels() {
        for (variant, s) in [
            (AppointmentType::Checkup, "Checkup"),
            (AppointmentType::Consultation, "Consultation"),
            (AppointmentType::Emergency, "Emergency"),
            (AppointmentType::FollowUp, "Follow-up"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(AppointmentType::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn follow_up_serializes_with_hyphen() {
        let json = serde_json::to_string(&AppointmentType::FollowUp).unwrap();
        assert_eq!(json, "\"Follow-up\"");
        let back: AppointmentType = serde_json::from_str("\"Follow-up\"").unwrap();
        assert_eq!(back, AppointmentType::FollowUp);
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(PatientStatus::Inactive.to_string(), "Inactive");
        assert_eq!(AppointmentStatus::Cancelled.to_string(), "Cancelled");
    }

    #[test]
    fn invalid_enum_returns_error() {
        let err = PatientStatus::from_str("active").unwrap_err();
        assert!(matches!(
            err,
            ModelError::InvalidEnum { ref field, ref value } if field == "PatientStatus" && value == "active"
        ));
        assert!(Gender::from_str("").is_err());
        assert!(AppointmentStatus::from_str("Pending").is_err());
    }

    #[test]
    fn unknown_label_fails_deserialization() {
        assert!(serde_json::from_str::<PatientStatus>("\"Archived\"").is_err());
    }
}
