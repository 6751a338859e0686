use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{config::Config, error::Error};

/// Initialize the tracing subscriber.
///
/// Honors `RUST_LOG` when set, otherwise defaults to info-level output for
/// this crate.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("starfav=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().compact())
        .init();
}

/// Load variables from a local `.env` file when present, then read the
/// configuration from the environment.
pub fn load_config() -> Result<Config, Error> {
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    Ok(config)
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("database connected, migrations applied");

    Ok(db)
}
