//! Runs the todo REST API.
//!
//! Usage:
//!
//! ```text
//! todox
//! ```
//!
//! Settings come from the environment, optionally seeded from a `.env` file
//! in the working directory: `DB_USER`, `DB_PASSWORD`, `DB_NAME`, `DB_HOST`
//! and `DB_SSL_MODE` are required; `DB_PORT`, `DB_POOL_SIZE` and `API_PORT`
//! are optional.

use todox::{app, config::AppConfig, telemetry};
use tracing::error;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    telemetry::init()?;

    let result = match AppConfig::from_env() {
        Ok(config) => app::run(config).await,
        Err(err) => Err(err.into()),
    };

    if let Err(err) = &result {
        error!(error = %err, "todox stopped");
    }
    result.map_err(Into::into)
}
