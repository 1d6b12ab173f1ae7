//! Driver Domain Model
//!
//! A fleet member who can log in, be assigned to cars, and carries an
//! optional license number (drivers registered before the license rule
//! have none until the update form backfills it).

use std::fmt;

/// Newtype wrapper for Driver IDs providing type safety
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DriverId(i64);

impl DriverId {
    #[must_use]
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn as_i64(self) -> i64 {
        self.0
    }
}

impl fmt::Display for DriverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for DriverId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Data required to register a new Driver
#[derive(Debug, Clone)]
pub struct CreateDriverData {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
    pub license_number: String,
}

/// Driver domain entity
#[derive(Debug, Clone)]
pub struct Driver {
    id: DriverId,
    username: String,
    first_name: String,
    last_name: String,
    password_hash: String,
    license_number: Option<String>,
}

impl Driver {
    /// Restore a Driver from persisted data
    #[must_use]
    pub fn restore(
        id: DriverId,
        username: String,
        first_name: String,
        last_name: String,
        password_hash: String,
        license_number: Option<String>,
    ) -> Self {
        Self {
            id,
            username,
            first_name,
            last_name,
            password_hash,
            license_number,
        }
    }

    /// Replace the license number, returning the new state
    #[must_use]
    pub fn with_license_number(self, license_number: String) -> Self {
        Self {
            license_number: Some(license_number),
            ..self
        }
    }

    #[must_use]
    pub fn id(&self) -> DriverId {
        self.id
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    #[must_use]
    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    #[must_use]
    pub fn license_number(&self) -> Option<&str> {
        self.license_number.as_deref()
    }
}

impl fmt::Display for Driver {
    /// Display form: `"{username} ({first_name} {last_name})"`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} {})", self.username, self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bob() -> Driver {
        Driver::restore(
            DriverId::new(1),
            "bob".to_string(),
            "bob".to_string(),
            "king".to_string(),
            "salt$digest".to_string(),
            None,
        )
    }

    #[test]
    fn display_form_is_username_then_names_in_parentheses() {
        assert_eq!(bob().to_string(), "bob (bob king)");
    }

    #[test]
    fn with_license_number_sets_the_license() {
        let updated = bob().with_license_number("CCC12345".to_string());
        assert_eq!(updated.license_number(), Some("CCC12345"));
        assert_eq!(updated.id(), DriverId::new(1));
    }
}
