//! Controller del roster de conductores
//!
//! Alta con normalización de licencia y contacto, chequeo de unicidad
//! de licencia contra el backend, listado con búsqueda en memoria y baja.

use validator::Validate;

use crate::clients::supabase::SupabaseClient;
use crate::dto::driver_dto::{CreateDriverRequest, DriverQuery, DriverResponse};
use crate::models::driver::{DriverStatus, NewDriver};
use crate::repositories::driver_repository::DriverRepository;
use crate::utils::errors::{bad_request_error, AppError};
use crate::utils::validation::{
    normalize_contact, normalize_license, validate_contact, validate_license,
};

pub struct DriverController {
    drivers: DriverRepository,
}

impl DriverController {
    pub fn new(supabase: SupabaseClient) -> Self {
        Self {
            drivers: DriverRepository::new(supabase),
        }
    }

    pub async fn list(&self, query: DriverQuery) -> Result<Vec<DriverResponse>, AppError> {
        let drivers = match query.status.as_deref() {
            Some("available") => self.drivers.find_available().await?,
            _ => self.drivers.find_all().await?,
        };

        let search = query.search.unwrap_or_default().to_lowercase();
        let response = drivers
            .into_iter()
            .filter(|driver| {
                search.is_empty()
                    || driver.name.to_lowercase().contains(&search)
                    || driver.license.to_lowercase().contains(&search)
            })
            .map(DriverResponse::from)
            .collect();

        Ok(response)
    }

    pub async fn create(&self, request: CreateDriverRequest) -> Result<String, AppError> {
        request.validate().map_err(AppError::Validation)?;

        // Normalizar licencia y validar el formato SA#######
        let license = normalize_license(&request.license);
        if validate_license(&license).is_err() {
            return Err(bad_request_error(
                "License number must begin with 'SA' followed by 7 digits (e.g. SA1000005).",
            ));
        }

        // Unicidad sobre el valor normalizado. Acá un fallo de la consulta
        // sí bloquea el alta (a diferencia del chequeo de matrículas).
        match self.drivers.license_exists(&license).await {
            Ok(true) => {
                return Err(AppError::Conflict(
                    "License number already exists. It must be unique.".to_string(),
                ));
            }
            Ok(false) => {}
            Err(e) => {
                log::error!("❌ Error validando unicidad de licencia: {}", e);
                return Err(bad_request_error("Could not validate license number uniqueness."));
            }
        }

        let contact = normalize_contact(&request.contact);
        if validate_contact(&contact).is_err() {
            return Err(bad_request_error(
                "Contact number must be exactly 10 digits (numbers only).",
            ));
        }

        let driver = NewDriver {
            name: request.name,
            email: request.email,
            license,
            contact,
            status: request.status.unwrap_or(DriverStatus::Available),
        };
        self.drivers.insert(&driver).await?;

        Ok(format!("Conductor {} registrado exitosamente", driver.name))
    }

    pub async fn delete(&self, id: i64) -> Result<String, AppError> {
        self.drivers.delete(id).await?;
        Ok("Conductor eliminado exitosamente".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> DriverController {
        DriverController::new(SupabaseClient::uninitialized())
    }

    fn request(license: &str) -> CreateDriverRequest {
        CreateDriverRequest {
            name: "Thandi Mokoena".to_string(),
            email: "thandi@fleet.test".to_string(),
            license: license.to_string(),
            contact: "082-555-1234".to_string(),
            status: None,
        }
    }

    #[tokio::test]
    async fn test_create_rejects_short_license_before_any_network_call() {
        // El backend es un stub: si la validación local no cortara antes,
        // el error sería NotInitialized y no el mensaje de formato
        let err = controller().create(request("SA100005")).await.unwrap_err();
        match err {
            AppError::BadRequest(msg) => {
                assert_eq!(
                    msg,
                    "License number must begin with 'SA' followed by 7 digits (e.g. SA1000005)."
                );
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_normalizes_license_before_validating() {
        // "sa-100 0005" normaliza a SA1000005: pasa el formato y recién
        // entonces toca el backend (que acá no está configurado)
        let err = controller().create(request("sa-100 0005")).await.unwrap_err();
        match err {
            AppError::BadRequest(msg) => {
                assert_eq!(msg, "Could not validate license number uniqueness.");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_rejects_malformed_email() {
        let mut bad = request("SA1000005");
        bad.email = "not-an-email".to_string();
        let err = controller().create(bad).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
