//! Contains global statics

use config::Config;
use once_cell::sync::Lazy;
use sqlx::SqlitePool;
use tracing::info;

/// The configuration loaded from config file
pub(crate) static CONFIG: Lazy<Config> = Lazy::new(|| {
  Config::builder()
    .add_source(config::File::with_name("config.toml"))
    // Add in settings from the environment (with a prefix of LEARNSPHERE)
    // E.g. `LEARNSPHERE_DEBUG=1 ./target/app` would set the `debug` key
    .add_source(config::Environment::with_prefix("LEARNSPHERE"))
    .build()
    .unwrap()
});

/// The SQLite connection backing the durable session store
pub(crate) static DB_LAZY: Lazy<SqlitePool> = Lazy::new(|| {
  let db_url = CONFIG.get_string("database_url").expect("database_url must be set!");
  info!("database_url: {db_url}");
  SqlitePool::connect_lazy(&db_url).unwrap()
});
