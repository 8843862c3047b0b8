use migration::{Migrator, MigratorTrait};
use sea_orm::{
    ConnectOptions, Database, DatabaseConnection,
    sqlx::sqlite::{SqliteJournalMode, SqliteSynchronous},
};

use crate::error::AppResult;

pub async fn connect_and_migrate(database_url: &str) -> AppResult<DatabaseConnection> {
    let mut options = ConnectOptions::new(database_url);
    options.sqlx_logging(false);
    // Set per connection, so every pooled connection gets them.
    options.map_sqlx_sqlite_opts(|opts| {
        opts.journal_mode(SqliteJournalMode::Wal).synchronous(SqliteSynchronous::Normal)
    });
    // Every pooled connection to `:memory:` opens its own empty database.
    if database_url.contains(":memory:") {
        options.max_connections(1).min_connections(1);
    }

    let db = Database::connect(options).await?;

    Migrator::up(&db, None).await?;
    tracing::info!("connected to database");
    Ok(db)
}

pub async fn close(db: DatabaseConnection) {
    match db.close().await {
        Ok(()) => tracing::info!("disconnected from database"),
        Err(err) => tracing::error!(error = %err, "failed to close database"),
    }
}
