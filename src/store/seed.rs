//! Seed payload: the fixed entity set a session starts from.
//!
//! The built-in fixture mirrors the admin console's sample data. A payload
//! on disk (see `config::seed_path`) replaces it wholesale.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Appointment, Doctor, Entity, Patient};

const BUILTIN_SEED: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/seed.json"));

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed seed payload: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate {entity_type} id in seed: {id}")]
    DuplicateId { entity_type: String, id: String },

    #[error("{entity_type} {id} references unknown {reference}")]
    DanglingReference {
        entity_type: String,
        id: String,
        reference: String,
    },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub patients: Vec<Patient>,
    #[serde(default)]
    pub appointments: Vec<Appointment>,
    #[serde(default)]
    pub doctors: Vec<Doctor>,
}

impl Seed {
    /// The console's sample data, embedded at compile time.
    pub fn builtin() -> Result<Self, SeedError> {
        Self::from_json(BUILTIN_SEED)
    }

    pub fn from_json(payload: &str) -> Result<Self, SeedError> {
        Ok(serde_json::from_str(payload)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, SeedError> {
        let payload = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), bytes = payload.len(), "read seed file");
        Self::from_json(&payload)
    }

    /// Rejects duplicate ids per kind and appointments pointing at
    /// patients or doctors absent from the payload.
    pub fn validate(&self) -> Result<(), SeedError> {
        let patient_ids = unique_ids(&self.patients)?;
        let doctor_ids = unique_ids(&self.doctors)?;
        unique_ids(&self.appointments)?;

        for appt in &self.appointments {
            if !patient_ids.contains(appt.patient_id.as_str()) {
                return Err(dangling(appt, "patient", &appt.patient_id));
            }
            if !doctor_ids.contains(appt.doctor_id.as_str()) {
                return Err(dangling(appt, "doctor", &appt.doctor_id));
            }
        }
        Ok(())
    }
}

fn unique_ids<T: Entity>(entities: &[T]) -> Result<HashSet<&str>, SeedError> {
    let mut ids = HashSet::with_capacity(entities.len());
    for entity in entities {
        if !ids.insert(entity.id()) {
            return Err(SeedError::DuplicateId {
                entity_type: T::KIND.into(),
                id: entity.id().into(),
            });
        }
    }
    Ok(ids)
}

fn dangling(appt: &Appointment, kind: &str, id: &str) -> SeedError {
    SeedError::DanglingReference {
        entity_type: Appointment::KIND.into(),
        id: appt.id.clone(),
        reference: format!("{kind} {id}"),
    }
}
