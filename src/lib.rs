mod app;
pub mod config;
mod database;
pub mod details;
mod error;
pub mod migration;
mod orm;
mod pagination;
mod schema;
mod service;
mod store;

pub use app::{build, App};
use error::Error;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

#[cfg(test)]
mod test;

pub fn init_tracing(config: &config::Log) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "songbook=info,tower_http=info".into()),
        )
        .with(config.layer())
        .try_init()
}
