//! Utilidades de validación
//!
//! Este módulo contiene las transformaciones puras y validaciones de
//! formato que se aplican en el límite de envío de formularios:
//! matrículas, licencias de conducir, teléfonos y fechas.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    /// Licencia sudafricana: 'SA' seguido de exactamente 7 dígitos
    static ref LICENSE_RE: Regex = Regex::new(r"^SA\d{7}$").unwrap();
    /// Contacto: exactamente 10 dígitos
    static ref CONTACT_RE: Regex = Regex::new(r"^\d{10}$").unwrap();
}

/// Normalizar matrícula: mayúsculas, solo alfanuméricos
pub fn normalize_plate(value: &str) -> String {
    value
        .to_uppercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

/// Normalizar número de licencia: misma transformación que la matrícula
pub fn normalize_license(value: &str) -> String {
    normalize_plate(value)
}

/// Validar una licencia ya normalizada contra el formato SA#######
pub fn validate_license(value: &str) -> Result<(), ValidationError> {
    if !LICENSE_RE.is_match(value) {
        let mut error = ValidationError::new("license");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"SA followed by 7 digits".to_string());
        return Err(error);
    }
    Ok(())
}

/// Normalizar contacto: conservar solo dígitos
pub fn normalize_contact(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Validar un contacto ya normalizado: exactamente 10 dígitos
pub fn validate_contact(value: &str) -> Result<(), ValidationError> {
    if !CONTACT_RE.is_match(value) {
        let mut error = ValidationError::new("contact");
        error.add_param("value".into(), &value.to_string());
        error.add_param("length".into(), &"10 digits".to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar y convertir string a fecha
pub fn validate_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        let mut error = ValidationError::new("date");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"YYYY-MM-DD".to_string());
        error
    })
}

/// Validar que una fecha no sea anterior a hoy
pub fn validate_not_past(date: NaiveDate, today: NaiveDate) -> Result<(), ValidationError> {
    if date < today {
        let mut error = ValidationError::new("past_date");
        error.add_param("value".into(), &date.to_string());
        error.add_param("today".into(), &today.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor esté en un rango específico
pub fn validate_range<T: PartialOrd + std::fmt::Display + serde::Serialize>(
    value: T,
    min: T,
    max: T,
) -> Result<(), ValidationError> {
    if value < min || value > max {
        let mut error = ValidationError::new("range");
        error.add_param("min".into(), &min);
        error.add_param("max".into(), &max);
        error.add_param("actual".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor sea no negativo
pub fn validate_non_negative<T: PartialOrd + std::fmt::Display + num_traits::Zero + serde::Serialize>(
    value: T,
) -> Result<(), ValidationError> {
    if value < T::zero() {
        let mut error = ValidationError::new("non_negative");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_plate() {
        assert_eq!(normalize_plate("ca 123-456"), "CA123456");
        assert_eq!(normalize_plate("abc123gp"), "ABC123GP");
        assert_eq!(normalize_plate("  "), "");
    }

    #[test]
    fn test_normalize_license() {
        assert_eq!(normalize_license("sa-100 0005"), "SA1000005");
        assert_eq!(normalize_license("SA1000005"), "SA1000005");
    }

    #[test]
    fn test_validate_license() {
        assert!(validate_license("SA1000005").is_ok());
        assert!(validate_license(&normalize_license("sa-100 0005")).is_ok());
        // 6 dígitos
        assert!(validate_license("SA100005").is_err());
        // 8 dígitos
        assert!(validate_license("SA10000055").is_err());
        assert!(validate_license("XX1000005").is_err());
        assert!(validate_license("sa1000005").is_err());
    }

    #[test]
    fn test_normalize_contact() {
        assert_eq!(normalize_contact("082-555-1234"), "0825551234");
        assert_eq!(normalize_contact("(082) 555 1234"), "0825551234");
    }

    #[test]
    fn test_validate_contact() {
        assert!(validate_contact("0825551234").is_ok());
        assert!(validate_contact("082555123").is_err());
        assert!(validate_contact("08255512345").is_err());
        assert!(validate_contact("082555123a").is_err());
    }

    #[test]
    fn test_validate_date() {
        assert!(validate_date("2024-01-15").is_ok());
        assert!(validate_date("2024/01/15").is_err());
    }

    #[test]
    fn test_validate_not_past() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        assert!(validate_not_past(today, today).is_ok());
        assert!(validate_not_past(today.succ_opt().unwrap(), today).is_ok());
        assert!(validate_not_past(today.pred_opt().unwrap(), today).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range(2020, 1900, 2026).is_ok());
        assert!(validate_range(1899, 1900, 2026).is_err());
        assert!(validate_range(2027, 1900, 2026).is_err());
    }

    #[test]
    fn test_validate_non_negative() {
        use rust_decimal::Decimal;
        assert!(validate_non_negative(Decimal::ZERO).is_ok());
        assert!(validate_non_negative(Decimal::new(45050, 2)).is_ok());
        assert!(validate_non_negative(Decimal::new(-1, 0)).is_err());
    }
}
