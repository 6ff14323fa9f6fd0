mod database;
mod details;
mod listing;
pub mod log;
mod server;

pub use database::Database;
pub use details::Details;
use figment::providers::{Env, Serialized};
use figment::Figment;
pub use listing::Listing;
pub use log::Log;
use serde::Deserialize;
pub use server::Server;

pub const ENV_PREFIX: &str = "SONGBOOK_";

#[derive(Debug, Deserialize)]
pub struct Config {
    pub server: Server,
    pub database: Database,
    pub details: Details,
    pub listing: Listing,
    pub log: Log,
}

impl Config {
    pub fn new() -> Result<Self, figment::Error> {
        Self::extract(Figment::new().merge(Env::prefixed(ENV_PREFIX).split("__")))
    }

    fn extract(figment: Figment) -> Result<Self, figment::Error> {
        figment
            .join(Serialized::default("server", Server::default()))
            .join(Serialized::default("details", Details::default()))
            .join(Serialized::default("listing", Listing::default()))
            .join(Serialized::default("log", Log::default()))
            .extract()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new().expect("Could not parse config")
    }
}
