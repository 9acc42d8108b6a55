use crate::config::Db;
use crate::infrastructure::db::database::{Database, DatabaseError};
use async_trait::async_trait;
use sqlx::{PgPool, postgres::PgPoolOptions};
use std::future::Future;
use std::pin::Pin;
use tracing::info;

/// Bootstrap DDL for the single `beers` table.
pub const BEERS_SCHEMA: &str = "CREATE TABLE IF NOT EXISTS beers (
    id BIGSERIAL PRIMARY KEY,
    name VARCHAR(200) NOT NULL UNIQUE,
    brand VARCHAR(200) NOT NULL,
    max INTEGER NOT NULL,
    quantity INTEGER NOT NULL,
    type VARCHAR(32) NOT NULL
)";

pub struct PostgresDatabase {
    pool: PgPool,
}

impl PostgresDatabase {
    pub async fn connect(url: &str) -> Result<Self, DatabaseError> {
        Self::connect_with(url, 5).await
    }

    pub async fn connect_with(url: &str, max_connections: u32) -> Result<Self, DatabaseError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await
            .map_err(|e| DatabaseError::Connection(e.to_string()))?;

        Ok(Self { pool })
    }

    /// Connect using the `[db]` settings section.
    pub async fn from_settings(db: &Db) -> Result<Self, DatabaseError> {
        let database = Self::connect_with(&db.url, db.max_connections).await?;
        if db.ensure_schema {
            database.ensure_schema().await?;
        }
        Ok(database)
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Create the `beers` table when it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<(), DatabaseError> {
        self.execute(BEERS_SCHEMA).await?;
        info!("beers_schema_ready");
        Ok(())
    }

    pub async fn with_conn<T, E, F>(&self, f: F) -> Result<T, E>
    where
        for<'c> F: FnOnce(
            &'c mut sqlx::PgConnection,
        ) -> Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'c>>,
        E: From<DatabaseError>,
    {
        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(|e| DatabaseError::Connection(e.to_string()))?;
        f(&mut conn).await
    }
}

#[async_trait]
impl Database for PostgresDatabase {
    async fn execute(&self, query: &str) -> Result<u64, DatabaseError> {
        let result = sqlx::query(query)
            .execute(&self.pool)
            .await
            .map_err(DatabaseError::from_sqlx)?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::PostgresDatabase;
    use crate::infrastructure::db::database::{Database, DatabaseError};

    fn test_db_url() -> Option<String> {
        std::env::var("DATABASE_URL").ok()
    }

    #[tokio::test]
    async fn given_valid_database_url_when_ping_should_succeed() {
        let Some(url) = test_db_url() else {
            return;
        };
        let db = PostgresDatabase::connect(&url).await.unwrap();

        db.ping().await.unwrap();
    }

    #[tokio::test]
    async fn given_schema_already_present_when_ensure_schema_should_be_idempotent() {
        let Some(url) = test_db_url() else {
            return;
        };
        let db = PostgresDatabase::connect(&url).await.unwrap();

        db.ensure_schema().await.unwrap();
        db.ensure_schema().await.unwrap();
    }

    #[tokio::test]
    async fn given_connection_when_with_conn_should_run_query_and_return_value() {
        let Some(url) = test_db_url() else {
            return;
        };
        let db = PostgresDatabase::connect(&url).await.unwrap();

        let value: i64 = db
            .with_conn(|conn| {
                Box::pin(async move {
                    let v = sqlx::query_scalar::<_, i64>("SELECT 1::BIGINT")
                        .fetch_one(conn)
                        .await
                        .map_err(|e| DatabaseError::Query(e.to_string()))?;
                    Ok::<i64, DatabaseError>(v)
                })
            })
            .await
            .unwrap();

        assert_eq!(value, 1);
    }
}
