use crate::infrastructure::db::database::DatabaseError;
use crate::infrastructure::db::dto::{BeerRow, NewBeerRow};
use crate::infrastructure::db::postgres::PostgresDatabase;
use crate::infrastructure::db::stores::beer_store::{BeerRepositoryError, BeerStore};
use async_trait::async_trait;
use sqlx::PgConnection;

const BEER_COLUMNS: &str = "id, name, brand, max, quantity, type AS beer_type";

#[derive(Clone)]
pub struct BeerStorePostgres {
    db: std::sync::Arc<PostgresDatabase>,
}

fn storage_error(err: sqlx::Error) -> BeerRepositoryError {
    BeerRepositoryError::from(DatabaseError::from_sqlx(err))
}

impl BeerStorePostgres {
    /// Build a Postgres-backed beer store.
    pub fn new(db: std::sync::Arc<PostgresDatabase>) -> Self {
        Self { db }
    }

    async fn list_impl_conn(conn: &mut PgConnection) -> Result<Vec<BeerRow>, BeerRepositoryError> {
        sqlx::query_as::<_, BeerRow>(&format!("SELECT {BEER_COLUMNS} FROM beers ORDER BY id"))
            .fetch_all(&mut *conn)
            .await
            .map_err(storage_error)
    }

    async fn get_impl_conn(
        conn: &mut PgConnection,
        id: i64,
    ) -> Result<Option<BeerRow>, BeerRepositoryError> {
        sqlx::query_as::<_, BeerRow>(&format!("SELECT {BEER_COLUMNS} FROM beers WHERE id = $1"))
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
            .map_err(storage_error)
    }

    async fn get_by_name_impl_conn(
        conn: &mut PgConnection,
        name: &str,
    ) -> Result<Option<BeerRow>, BeerRepositoryError> {
        sqlx::query_as::<_, BeerRow>(&format!("SELECT {BEER_COLUMNS} FROM beers WHERE name = $1"))
            .bind(name)
            .fetch_optional(&mut *conn)
            .await
            .map_err(storage_error)
    }

    async fn exists_impl_conn(conn: &mut PgConnection, id: i64) -> Result<bool, BeerRepositoryError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM beers WHERE id = $1)")
            .bind(id)
            .fetch_one(&mut *conn)
            .await
            .map_err(storage_error)
    }

    async fn insert_impl_conn(
        conn: &mut PgConnection,
        row: &NewBeerRow,
    ) -> Result<BeerRow, BeerRepositoryError> {
        let stored = sqlx::query_as::<_, BeerRow>(&format!(
            "INSERT INTO beers (
                name,
                brand,
                max,
                quantity,
                type
            )
            VALUES ($1,$2,$3,$4,$5)
            ON CONFLICT (name) DO NOTHING
            RETURNING {BEER_COLUMNS}"
        ))
        .bind(&row.name)
        .bind(&row.brand)
        .bind(row.max)
        .bind(row.quantity)
        .bind(&row.beer_type)
        .fetch_optional(&mut *conn)
        .await
        .map_err(storage_error)?;

        stored.ok_or(BeerRepositoryError::Conflict)
    }

    async fn update_impl_conn(
        conn: &mut PgConnection,
        row: &BeerRow,
    ) -> Result<BeerRow, BeerRepositoryError> {
        let stored = sqlx::query_as::<_, BeerRow>(&format!(
            "UPDATE beers SET
                name = $2,
                brand = $3,
                max = $4,
                quantity = $5,
                type = $6
            WHERE id = $1
            RETURNING {BEER_COLUMNS}"
        ))
        .bind(row.id)
        .bind(&row.name)
        .bind(&row.brand)
        .bind(row.max)
        .bind(row.quantity)
        .bind(&row.beer_type)
        .fetch_optional(&mut *conn)
        .await
        .map_err(storage_error)?;

        stored.ok_or(BeerRepositoryError::NotFound)
    }

    async fn delete_impl_conn(conn: &mut PgConnection, id: i64) -> Result<(), BeerRepositoryError> {
        sqlx::query("DELETE FROM beers WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(storage_error)?;

        Ok(())
    }

    async fn compare_and_set_quantity_impl_conn(
        conn: &mut PgConnection,
        id: i64,
        expected: i32,
        new: i32,
    ) -> Result<Option<BeerRow>, BeerRepositoryError> {
        sqlx::query_as::<_, BeerRow>(&format!(
            "UPDATE beers SET
                quantity = $3
            WHERE id = $1
              AND quantity = $2
            RETURNING {BEER_COLUMNS}"
        ))
        .bind(id)
        .bind(expected)
        .bind(new)
        .fetch_optional(&mut *conn)
        .await
        .map_err(storage_error)
    }
}

#[async_trait]
impl BeerStore for BeerStorePostgres {
    async fn list(&self) -> Result<Vec<BeerRow>, BeerRepositoryError> {
        self.db
            .with_conn(|conn| Box::pin(Self::list_impl_conn(conn)))
            .await
    }

    async fn get(&self, id: i64) -> Result<Option<BeerRow>, BeerRepositoryError> {
        self.db
            .with_conn(move |conn| Box::pin(Self::get_impl_conn(conn, id)))
            .await
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<BeerRow>, BeerRepositoryError> {
        let name = name.to_string();
        self.db
            .with_conn(move |conn| {
                Box::pin(async move { Self::get_by_name_impl_conn(conn, &name).await })
            })
            .await
    }

    async fn exists(&self, id: i64) -> Result<bool, BeerRepositoryError> {
        self.db
            .with_conn(move |conn| Box::pin(Self::exists_impl_conn(conn, id)))
            .await
    }

    async fn insert(&self, row: &NewBeerRow) -> Result<BeerRow, BeerRepositoryError> {
        let row = row.clone();
        self.db
            .with_conn(move |conn| Box::pin(async move { Self::insert_impl_conn(conn, &row).await }))
            .await
    }

    async fn update(&self, row: &BeerRow) -> Result<BeerRow, BeerRepositoryError> {
        let row = row.clone();
        self.db
            .with_conn(move |conn| Box::pin(async move { Self::update_impl_conn(conn, &row).await }))
            .await
    }

    async fn delete(&self, id: i64) -> Result<(), BeerRepositoryError> {
        self.db
            .with_conn(move |conn| Box::pin(Self::delete_impl_conn(conn, id)))
            .await
    }

    async fn compare_and_set_quantity(
        &self,
        id: i64,
        expected: i32,
        new: i32,
    ) -> Result<Option<BeerRow>, BeerRepositoryError> {
        self.db
            .with_conn(move |conn| {
                Box::pin(Self::compare_and_set_quantity_impl_conn(
                    conn, id, expected, new,
                ))
            })
            .await
    }
}
