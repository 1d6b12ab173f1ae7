//! Manufacturer Domain Model
//!
//! A car manufacturer: a unique name plus the country it operates from.

use std::fmt;

/// Newtype wrapper for Manufacturer IDs providing type safety
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ManufacturerId(i64);

impl ManufacturerId {
    #[must_use]
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn as_i64(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ManufacturerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ManufacturerId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Data required to create a new Manufacturer
#[derive(Debug, Clone)]
pub struct CreateManufacturerData {
    pub name: String,
    pub country: String,
}

/// Manufacturer domain entity
#[derive(Debug, Clone)]
pub struct Manufacturer {
    id: ManufacturerId,
    name: String,
    country: String,
}

impl Manufacturer {
    /// Restore a Manufacturer from persisted data
    #[must_use]
    pub fn restore(id: ManufacturerId, name: String, country: String) -> Self {
        Self { id, name, country }
    }

    /// Replace name and country, returning the new state
    #[must_use]
    pub fn with_details(self, name: String, country: String) -> Self {
        Self { name, country, ..self }
    }

    #[must_use]
    pub fn id(&self) -> ManufacturerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn country(&self) -> &str {
        &self.country
    }
}

impl fmt::Display for Manufacturer {
    /// Display form: `"{name} {country}"`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.country)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_form_is_name_then_country() {
        let manufacturer = Manufacturer::restore(
            ManufacturerId::new(1),
            "Toyota".to_string(),
            "Japan".to_string(),
        );
        assert_eq!(manufacturer.to_string(), "Toyota Japan");
    }

    #[test]
    fn with_details_replaces_fields_but_keeps_id() {
        let manufacturer = Manufacturer::restore(
            ManufacturerId::new(7),
            "Audi".to_string(),
            "Germany".to_string(),
        );
        let updated = manufacturer.with_details("BMW".to_string(), "Germany".to_string());
        assert_eq!(updated.id(), ManufacturerId::new(7));
        assert_eq!(updated.name(), "BMW");
    }
}
