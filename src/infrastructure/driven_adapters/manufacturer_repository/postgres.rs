//! PostgreSQL Manufacturer Repository Implementation
//!
//! Implements the ManufacturerRepository trait using SQLx for PostgreSQL.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::gateways::ManufacturerRepository;
use crate::domain::models::manufacturer::{CreateManufacturerData, Manufacturer, ManufacturerId};
use crate::shared::errors::RepositoryError;

/// Database row representation for the manufacturers table
#[derive(Debug, sqlx::FromRow)]
struct ManufacturerRow {
    id: i64,
    name: String,
    country: String,
}

impl From<ManufacturerRow> for Manufacturer {
    fn from(row: ManufacturerRow) -> Self {
        Manufacturer::restore(ManufacturerId::new(row.id), row.name, row.country)
    }
}

/// PostgreSQL implementation of ManufacturerRepository
pub struct PostgresManufacturerRepository {
    pool: PgPool,
}

impl PostgresManufacturerRepository {
    /// Create a new PostgresManufacturerRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ManufacturerRepository for PostgresManufacturerRepository {
    async fn find_all(&self) -> Result<Vec<Manufacturer>, RepositoryError> {
        let rows = sqlx::query_as::<_, ManufacturerRow>(
            r#"
            SELECT id, name, country
            FROM manufacturers
            ORDER BY name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Manufacturer::from).collect())
    }

    async fn find_by_id(
        &self,
        id: ManufacturerId,
    ) -> Result<Option<Manufacturer>, RepositoryError> {
        let row = sqlx::query_as::<_, ManufacturerRow>(
            r#"
            SELECT id, name, country
            FROM manufacturers
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Manufacturer::from))
    }

    async fn exists_by_name(
        &self,
        name: &str,
        exclude_id: Option<ManufacturerId>,
    ) -> Result<bool, RepositoryError> {
        let exists = match exclude_id {
            Some(id) => {
                sqlx::query_scalar::<_, bool>(
                    r#"
                    SELECT EXISTS(
                        SELECT 1 FROM manufacturers
                        WHERE name = $1 AND id != $2
                    )
                    "#,
                )
                .bind(name)
                .bind(id.as_i64())
                .fetch_one(&self.pool)
                .await?
            }
            None => {
                sqlx::query_scalar::<_, bool>(
                    r#"
                    SELECT EXISTS(
                        SELECT 1 FROM manufacturers WHERE name = $1
                    )
                    "#,
                )
                .bind(name)
                .fetch_one(&self.pool)
                .await?
            }
        };

        Ok(exists)
    }

    async fn create(
        &self,
        data: &CreateManufacturerData,
    ) -> Result<Manufacturer, RepositoryError> {
        let row = sqlx::query_as::<_, ManufacturerRow>(
            r#"
            INSERT INTO manufacturers (name, country)
            VALUES ($1, $2)
            RETURNING id, name, country
            "#,
        )
        .bind(&data.name)
        .bind(&data.country)
        .fetch_one(&self.pool)
        .await?;

        Ok(Manufacturer::from(row))
    }

    async fn update(
        &self,
        manufacturer: &Manufacturer,
    ) -> Result<Option<Manufacturer>, RepositoryError> {
        let row = sqlx::query_as::<_, ManufacturerRow>(
            r#"
            UPDATE manufacturers
            SET name = $2, country = $3
            WHERE id = $1
            RETURNING id, name, country
            "#,
        )
        .bind(manufacturer.id().as_i64())
        .bind(manufacturer.name())
        .bind(manufacturer.country())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Manufacturer::from))
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM manufacturers")
            .fetch_one(&self.pool)
            .await?;

        Ok(u64::try_from(count).unwrap_or_default())
    }
}
