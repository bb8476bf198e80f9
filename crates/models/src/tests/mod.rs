use migration::MigratorTrait;
use sea_orm::DatabaseConnection;

use crate::db::connect;



/// Connect and migrate, or `None` when no database is configured for this run.
pub(crate) async fn setup_test_db() -> anyhow::Result<Option<DatabaseConnection>> {
    if std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err() {
        println!("Skipping database tests (no DATABASE_URL or SKIP_DB_TESTS is set)");
        return Ok(None);
    }
    let db = connect().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(Some(db))
}

pub(crate) fn unique_name(prefix: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    format!("{prefix}_{nanos}")
}
