//! Clinic registry: the entity store behind the admin console and the
//! read-side projections it renders (patient search, per-day schedule,
//! calendar cells, dashboard).

pub mod config;
pub mod dashboard;
pub mod models;
pub mod query;
pub mod schedule;
pub mod search;
pub mod store;

pub use config::{DateMatching, QueryConfig};
pub use query::AppointmentView;
pub use store::{Registry, Seed, SeedError, StoreError};

use tracing_subscriber::EnvFilter;

/// Installs the fmt subscriber. `RUST_LOG` wins over the default filter.
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .try_init();

    tracing::info!("{} v{}", config::APP_NAME, config::APP_VERSION);
}
