use std::sync::Arc;

use crate::config::Config;
use crate::database::Database;
use crate::details;
use crate::service::Service;
use crate::store::Postgres;

#[derive(Clone)]
pub struct App {
    pub(crate) service: Service,
}

impl App {
    pub fn new(config: &Config) -> Result<Self, details::Error> {
        let store = Arc::new(Postgres::new(Database::new(&config.database)));
        let details = details::from_config(&config.details)?;
        Ok(Self { service: Service::new(store, details, config.listing.count) })
    }
}
