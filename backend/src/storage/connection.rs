use anyhow::Result;
use sqlx::{
    migrate::MigrateDatabase,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    Sqlite, SqlitePool,
};
use std::str::FromStr;
use std::sync::Arc;
use tracing::info;

/// DbConnection owns the pool shared by every repository
#[derive(Clone)]
pub struct DbConnection {
    pool: Arc<SqlitePool>,
}

impl DbConnection {
    /// Create a new database connection, creating the database and schema if needed
    pub async fn new(url: &str) -> Result<Self> {
        // Create database if it doesn't exist
        if !Sqlite::database_exists(url).await.unwrap_or(false) {
            info!("Creating database at {}", url);
            Sqlite::create_database(url).await?
        }

        // Signups rely on ON DELETE CASCADE, so every pooled connection needs FK enforcement
        let options = SqliteConnectOptions::from_str(url)?.foreign_keys(true);
        let pool = SqlitePoolOptions::new().connect_with(options).await?;

        Self::setup_schema(&pool).await?;

        Ok(Self { pool: Arc::new(pool) })
    }

    /// Initialize a test database with a unique name
    #[cfg(test)]
    pub async fn init_test() -> Result<Self> {
        let test_id = uuid::Uuid::new_v4().to_string();
        let db_url = format!("file:memdb_{}?mode=memory&cache=shared", test_id);

        Self::new(&db_url).await
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Set up the required database schema.
    ///
    /// Constraint names follow `pk_<table>`, `ck_<table>_<name>`,
    /// `fk_<table>_<column>_<referred_table>` and `ix_<table>_<column>`.
    async fn setup_schema(pool: &SqlitePool) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS campers (
                id INTEGER NOT NULL,
                name TEXT NOT NULL,
                age INTEGER NOT NULL,
                CONSTRAINT pk_campers PRIMARY KEY (id),
                CONSTRAINT ck_campers_age_range CHECK (age >= 8 AND age <= 18),
                CONSTRAINT ck_campers_name_not_empty CHECK (name <> '')
            );
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS activities (
                id INTEGER NOT NULL,
                name TEXT NOT NULL,
                difficulty INTEGER NOT NULL,
                CONSTRAINT pk_activities PRIMARY KEY (id)
            );
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS signups (
                id INTEGER NOT NULL,
                time INTEGER NOT NULL,
                camper_id INTEGER NOT NULL,
                activity_id INTEGER NOT NULL,
                CONSTRAINT pk_signups PRIMARY KEY (id),
                CONSTRAINT ck_signups_time_range CHECK (time >= 0 AND time <= 23),
                CONSTRAINT fk_signups_camper_id_campers
                    FOREIGN KEY (camper_id) REFERENCES campers (id),
                CONSTRAINT fk_signups_activity_id_activities
                    FOREIGN KEY (activity_id) REFERENCES activities (id) ON DELETE CASCADE
            );
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS ix_signups_camper_id ON signups (camper_id);")
            .execute(pool)
            .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS ix_signups_activity_id ON signups (activity_id);")
            .execute(pool)
            .await?;

        Ok(())
    }
}
