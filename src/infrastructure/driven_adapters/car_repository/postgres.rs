//! PostgreSQL Car Repository Implementation
//!
//! Implements the CarRepository trait using SQLx for PostgreSQL. Driver
//! assignments live in the car_drivers join table and are written inside
//! the same transaction as the car row.

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::gateways::CarRepository;
use crate::domain::models::car::{Car, CarId, CreateCarData};
use crate::domain::models::driver::DriverId;
use crate::domain::models::manufacturer::ManufacturerId;
use crate::shared::errors::RepositoryError;

/// Database row representation for the cars table
#[derive(Debug, sqlx::FromRow)]
struct CarRow {
    id: i64,
    model: String,
    manufacturer_id: i64,
}

/// Database row representation for the car_drivers join table
#[derive(Debug, sqlx::FromRow)]
struct AssignmentRow {
    car_id: i64,
    driver_id: i64,
}

impl CarRow {
    fn into_car(self, driver_ids: Vec<DriverId>) -> Car {
        Car::restore(
            CarId::new(self.id),
            self.model,
            ManufacturerId::new(self.manufacturer_id),
            driver_ids,
        )
    }
}

/// PostgreSQL implementation of CarRepository
pub struct PostgresCarRepository {
    pool: PgPool,
}

impl PostgresCarRepository {
    /// Create a new PostgresCarRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CarRepository for PostgresCarRepository {
    async fn find_all(&self) -> Result<Vec<Car>, RepositoryError> {
        let rows = sqlx::query_as::<_, CarRow>(
            r#"
            SELECT id, model, manufacturer_id
            FROM cars
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let assignment_rows = sqlx::query_as::<_, AssignmentRow>(
            r#"
            SELECT car_id, driver_id
            FROM car_drivers
            ORDER BY car_id ASC, driver_id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut assignments: HashMap<i64, Vec<DriverId>> = HashMap::new();
        for row in assignment_rows {
            assignments
                .entry(row.car_id)
                .or_default()
                .push(DriverId::new(row.driver_id));
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let driver_ids = assignments.remove(&row.id).unwrap_or_default();
                row.into_car(driver_ids)
            })
            .collect())
    }

    async fn find_by_id(&self, id: CarId) -> Result<Option<Car>, RepositoryError> {
        let row = sqlx::query_as::<_, CarRow>(
            r#"
            SELECT id, model, manufacturer_id
            FROM cars
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let driver_ids = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT driver_id
            FROM car_drivers
            WHERE car_id = $1
            ORDER BY driver_id ASC
            "#,
        )
        .bind(row.id)
        .fetch_all(&self.pool)
        .await?;

        let driver_ids = driver_ids.into_iter().map(DriverId::new).collect();
        Ok(Some(row.into_car(driver_ids)))
    }

    async fn create(&self, data: &CreateCarData) -> Result<Car, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, CarRow>(
            r#"
            INSERT INTO cars (model, manufacturer_id)
            VALUES ($1, $2)
            RETURNING id, model, manufacturer_id
            "#,
        )
        .bind(&data.model)
        .bind(data.manufacturer_id.as_i64())
        .fetch_one(&mut *tx)
        .await?;

        for driver_id in &data.driver_ids {
            sqlx::query(
                r#"
                INSERT INTO car_drivers (car_id, driver_id)
                VALUES ($1, $2)
                "#,
            )
            .bind(row.id)
            .bind(driver_id.as_i64())
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(row.into_car(data.driver_ids.clone()))
    }

    async fn update(&self, car: &Car) -> Result<Option<Car>, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, CarRow>(
            r#"
            UPDATE cars
            SET model = $2, manufacturer_id = $3
            WHERE id = $1
            RETURNING id, model, manufacturer_id
            "#,
        )
        .bind(car.id().as_i64())
        .bind(car.model())
        .bind(car.manufacturer_id().as_i64())
        .fetch_optional(&mut *tx)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        // Replace the assignments wholesale
        sqlx::query("DELETE FROM car_drivers WHERE car_id = $1")
            .bind(row.id)
            .execute(&mut *tx)
            .await?;

        for driver_id in car.driver_ids() {
            sqlx::query(
                r#"
                INSERT INTO car_drivers (car_id, driver_id)
                VALUES ($1, $2)
                "#,
            )
            .bind(row.id)
            .bind(driver_id.as_i64())
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(Some(row.into_car(car.driver_ids().to_vec())))
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM cars")
            .fetch_one(&self.pool)
            .await?;

        Ok(u64::try_from(count).unwrap_or_default())
    }
}
