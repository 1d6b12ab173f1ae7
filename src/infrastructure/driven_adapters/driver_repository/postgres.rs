//! PostgreSQL Driver Repository Implementation
//!
//! Implements the DriverRepository trait using SQLx for PostgreSQL.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::gateways::DriverRepository;
use crate::domain::models::driver::{CreateDriverData, Driver, DriverId};
use crate::shared::errors::RepositoryError;

/// Database row representation for the drivers table
#[derive(Debug, sqlx::FromRow)]
struct DriverRow {
    id: i64,
    username: String,
    first_name: String,
    last_name: String,
    password_hash: String,
    license_number: Option<String>,
}

impl From<DriverRow> for Driver {
    fn from(row: DriverRow) -> Self {
        Driver::restore(
            DriverId::new(row.id),
            row.username,
            row.first_name,
            row.last_name,
            row.password_hash,
            row.license_number,
        )
    }
}

/// PostgreSQL implementation of DriverRepository
pub struct PostgresDriverRepository {
    pool: PgPool,
}

impl PostgresDriverRepository {
    /// Create a new PostgresDriverRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DriverRepository for PostgresDriverRepository {
    async fn find_all(&self) -> Result<Vec<Driver>, RepositoryError> {
        let rows = sqlx::query_as::<_, DriverRow>(
            r#"
            SELECT id, username, first_name, last_name, password_hash, license_number
            FROM drivers
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Driver::from).collect())
    }

    async fn find_by_id(&self, id: DriverId) -> Result<Option<Driver>, RepositoryError> {
        let row = sqlx::query_as::<_, DriverRow>(
            r#"
            SELECT id, username, first_name, last_name, password_hash, license_number
            FROM drivers
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Driver::from))
    }

    async fn find_by_ids(&self, ids: &[DriverId]) -> Result<Vec<Driver>, RepositoryError> {
        let ids: Vec<i64> = ids.iter().map(|id| id.as_i64()).collect();

        let rows = sqlx::query_as::<_, DriverRow>(
            r#"
            SELECT id, username, first_name, last_name, password_hash, license_number
            FROM drivers
            WHERE id = ANY($1)
            ORDER BY id ASC
            "#,
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Driver::from).collect())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Driver>, RepositoryError> {
        let row = sqlx::query_as::<_, DriverRow>(
            r#"
            SELECT id, username, first_name, last_name, password_hash, license_number
            FROM drivers
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Driver::from))
    }

    async fn exists_by_username(&self, username: &str) -> Result<bool, RepositoryError> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM drivers WHERE username = $1
            )
            "#,
        )
        .bind(username)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn exists_by_license_number(
        &self,
        license_number: &str,
        exclude_id: Option<DriverId>,
    ) -> Result<bool, RepositoryError> {
        let exists = match exclude_id {
            Some(id) => {
                sqlx::query_scalar::<_, bool>(
                    r#"
                    SELECT EXISTS(
                        SELECT 1 FROM drivers
                        WHERE license_number = $1 AND id != $2
                    )
                    "#,
                )
                .bind(license_number)
                .bind(id.as_i64())
                .fetch_one(&self.pool)
                .await?
            }
            None => {
                sqlx::query_scalar::<_, bool>(
                    r#"
                    SELECT EXISTS(
                        SELECT 1 FROM drivers WHERE license_number = $1
                    )
                    "#,
                )
                .bind(license_number)
                .fetch_one(&self.pool)
                .await?
            }
        };

        Ok(exists)
    }

    async fn create(&self, data: &CreateDriverData) -> Result<Driver, RepositoryError> {
        let row = sqlx::query_as::<_, DriverRow>(
            r#"
            INSERT INTO drivers (username, first_name, last_name, password_hash, license_number)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, username, first_name, last_name, password_hash, license_number
            "#,
        )
        .bind(&data.username)
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.password_hash)
        .bind(&data.license_number)
        .fetch_one(&self.pool)
        .await?;

        Ok(Driver::from(row))
    }

    async fn update_license_number(
        &self,
        id: DriverId,
        license_number: &str,
    ) -> Result<Option<Driver>, RepositoryError> {
        let row = sqlx::query_as::<_, DriverRow>(
            r#"
            UPDATE drivers
            SET license_number = $2
            WHERE id = $1
            RETURNING id, username, first_name, last_name, password_hash, license_number
            "#,
        )
        .bind(id.as_i64())
        .bind(license_number)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Driver::from))
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM drivers")
            .fetch_one(&self.pool)
            .await?;

        Ok(u64::try_from(count).unwrap_or_default())
    }
}
