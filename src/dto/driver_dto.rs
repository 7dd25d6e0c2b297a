use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::driver::{Driver, DriverStatus};

// Request para registrar un conductor
#[derive(Debug, Deserialize, Validate)]
pub struct CreateDriverRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1))]
    pub license: String,

    #[validate(length(min = 1))]
    pub contact: String,

    #[serde(default)]
    pub status: Option<DriverStatus>,
}

// Filtros del listado
#[derive(Debug, Default, Deserialize)]
pub struct DriverQuery {
    pub search: Option<String>,
    pub status: Option<String>,
}

// Response de conductor
#[derive(Debug, Serialize)]
pub struct DriverResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub license: String,
    pub contact: String,
    pub status: DriverStatus,
    pub initials: String,
}

impl From<Driver> for DriverResponse {
    fn from(driver: Driver) -> Self {
        let initials = initials(&driver.name);
        Self {
            id: driver.id,
            name: driver.name,
            email: driver.email,
            license: driver.license,
            contact: driver.contact,
            status: driver.status,
            initials,
        }
    }
}

/// Iniciales del nombre para el avatar del roster
fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect::<String>()
        .to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(initials("Thandi Mokoena"), "TM");
        assert_eq!(initials("jan"), "J");
        assert_eq!(initials(""), "");
    }
}
