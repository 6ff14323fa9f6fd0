use diesel_async::pooled_connection::{deadpool, AsyncDieselConnectionManager};
use diesel_async::AsyncPgConnection;

use crate::Error;

type Connection = AsyncDieselConnectionManager<AsyncPgConnection>;
type Pool = deadpool::Pool<AsyncPgConnection>;

#[derive(Clone)]
pub struct Database {
    pool: Pool,
}

impl Database {
    pub fn new(config: &crate::config::Database) -> Self {
        let pool = Pool::builder(Connection::new(&config.url))
            .build()
            .expect("Could not build database connection pool");
        Self { pool }
    }

    pub async fn get(&self) -> Result<deadpool::Object<AsyncPgConnection>, Error> {
        self.pool.get().await.map_err(|_| Error::CheckoutConnectionPool)
    }
}
