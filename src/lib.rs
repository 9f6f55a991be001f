pub mod config;
pub mod error;
pub mod models;
pub mod triage;
pub mod validation;

pub use error::{ErrorBody, TriageError};
pub use validation::{ValidConsultation, ValidationResult};

use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber for the host process.
///
/// Honors `RUST_LOG`; falls back to `config::default_log_filter()`.
/// A subscriber installed earlier by the host is left in place.
pub fn init_tracing() {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("{} core v{} ready", config::APP_NAME, config::APP_VERSION);
    }
}
