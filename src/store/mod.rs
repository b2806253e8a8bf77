//! Entity store: owns every entity collection for the session.
//!
//! `load`/`all` is the only seam a persistent backend would need to replace;
//! the filter, grouping and query layers read borrowed snapshots and never
//! mutate.

pub mod collection;
pub mod seed;

pub use collection::EntityStore;
pub use seed::{Seed, SeedError};

use thiserror::Error;

use crate::config::{self, QueryConfig};
use crate::models::{Appointment, AppointmentStatus, Doctor, Entity, ModelError, Patient};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    #[error(transparent)]
    Model(#[from] ModelError),
}

/// All collections plus the projection settings queries run with.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    patients: EntityStore<Patient>,
    appointments: EntityStore<Appointment>,
    doctors: EntityStore<Doctor>,
    config: QueryConfig,
}

impl Registry {
    pub fn new(config: QueryConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Validates the seed, then loads every collection from it.
    pub fn from_seed(seed: Seed, config: QueryConfig) -> Result<Self, SeedError> {
        seed.validate()?;
        let mut registry = Self::new(config);
        registry.load_patients(seed.patients);
        registry.load_doctors(seed.doctors);
        registry.load_appointments(seed.appointments);
        Ok(registry)
    }

    /// Session start: the seed file at `config::seed_path()` if present,
    /// otherwise the built-in fixture.
    pub fn bootstrap(config: QueryConfig) -> Result<Self, SeedError> {
        let path = config::seed_path();
        let seed = if path.is_file() {
            tracing::info!(path = %path.display(), "loading seed from file");
            Seed::from_path(&path)?
        } else {
            tracing::info!("no seed file found, using built-in sample data");
            Seed::builtin()?
        };
        Self::from_seed(seed, config)
    }

    // ── Collections ─────────────────────────────────────

    pub fn load_patients(&mut self, patients: Vec<Patient>) {
        self.patients.load(patients);
    }

    pub fn load_appointments(&mut self, appointments: Vec<Appointment>) {
        self.appointments.load(appointments);
    }

    pub fn load_doctors(&mut self, doctors: Vec<Doctor>) {
        self.doctors.load(doctors);
    }

    pub fn patients(&self) -> &EntityStore<Patient> {
        &self.patients
    }

    pub fn appointments(&self) -> &EntityStore<Appointment> {
        &self.appointments
    }

    pub fn doctors(&self) -> &EntityStore<Doctor> {
        &self.doctors
    }

    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    // ── Mutation ────────────────────────────────────────

    /// Applies the appointment status state machine to a stored appointment.
    pub fn transition_appointment(
        &mut self,
        id: &str,
        next: AppointmentStatus,
    ) -> Result<&Appointment, StoreError> {
        let appt = self
            .appointments
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound {
                entity_type: Appointment::KIND.into(),
                id: id.into(),
            })?;

        let from = appt.status;
        if let Err(e) = appt.transition_to(next) {
            tracing::warn!(id, %from, to = %next, "rejected appointment status change");
            return Err(e.into());
        }
        tracing::debug!(id, %from, to = %next, "appointment status changed");
        Ok(appt)
    }
}
