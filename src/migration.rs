use diesel::Connection;
use diesel_async::async_connection_wrapper::AsyncConnectionWrapper;
use diesel_async::AsyncPgConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Brings the `songs` schema up to date and returns the versions that were applied.
pub async fn run(database_url: &str) -> Vec<String> {
    let database_url = database_url.to_owned();
    let applied = tokio::task::spawn_blocking(move || {
        let mut conn = AsyncConnectionWrapper::<AsyncPgConnection>::establish(&database_url)
            .expect("Could not connect to the database");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("Could not run pending migration(s)")
            .into_iter()
            .map(|version| version.to_string())
            .collect::<Vec<_>>()
    })
    .await
    .expect("Could not spawn migration thread");
    tracing::info!(?applied, "migration done");
    applied
}
