//! Car Domain Model
//!
//! A fleet vehicle: its model name, the manufacturer it references, and the
//! set of drivers currently assigned to it.

use std::fmt;

use crate::domain::models::driver::DriverId;
use crate::domain::models::manufacturer::ManufacturerId;

/// Newtype wrapper for Car IDs providing type safety
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CarId(i64);

impl CarId {
    #[must_use]
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn as_i64(self) -> i64 {
        self.0
    }
}

impl fmt::Display for CarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for CarId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Data required to create a new Car
#[derive(Debug, Clone)]
pub struct CreateCarData {
    pub model: String,
    pub manufacturer_id: ManufacturerId,
    pub driver_ids: Vec<DriverId>,
}

/// Car domain entity
#[derive(Debug, Clone)]
pub struct Car {
    id: CarId,
    model: String,
    manufacturer_id: ManufacturerId,
    driver_ids: Vec<DriverId>,
}

impl Car {
    /// Restore a Car from persisted data
    #[must_use]
    pub fn restore(
        id: CarId,
        model: String,
        manufacturer_id: ManufacturerId,
        driver_ids: Vec<DriverId>,
    ) -> Self {
        Self {
            id,
            model,
            manufacturer_id,
            driver_ids,
        }
    }

    /// Replace model, manufacturer and assigned drivers (full update)
    #[must_use]
    pub fn with_details(
        self,
        model: String,
        manufacturer_id: ManufacturerId,
        driver_ids: Vec<DriverId>,
    ) -> Self {
        Self {
            model,
            manufacturer_id,
            driver_ids,
            ..self
        }
    }

    /// Toggle one driver's assignment: removes them when assigned, adds
    /// them otherwise.
    #[must_use]
    pub fn with_driver_toggled(mut self, driver_id: DriverId) -> Self {
        if self.has_driver(driver_id) {
            self.driver_ids.retain(|id| *id != driver_id);
        } else {
            self.driver_ids.push(driver_id);
        }
        self
    }

    #[must_use]
    pub fn has_driver(&self, driver_id: DriverId) -> bool {
        self.driver_ids.contains(&driver_id)
    }

    #[must_use]
    pub fn id(&self) -> CarId {
        self.id
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    #[must_use]
    pub fn manufacturer_id(&self) -> ManufacturerId {
        self.manufacturer_id
    }

    #[must_use]
    pub fn driver_ids(&self) -> &[DriverId] {
        &self.driver_ids
    }
}

impl fmt::Display for Car {
    /// Display form: the model string
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.model)
    }
}
