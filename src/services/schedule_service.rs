//! Cálculo de próximos servicios
//!
//! Reducción min-por-fecha sobre los registros de mantenimiento filtrados
//! a hoy-o-futuro, agrupados por matrícula. Un recorrido O(n), sin estado
//! incremental.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::maintenance::ScheduledService;

/// Próximo servicio agendado de un vehículo
#[derive(Debug, Clone, Serialize)]
pub struct NextService {
    pub date: NaiveDate,
    pub service: Option<String>,
}

/// Servicio próximo a vencer para las alertas del dashboard
#[derive(Debug, Clone, Serialize)]
pub struct UpcomingService {
    pub vehicle: String,
    pub service: Option<String>,
    pub due: NaiveDate,
    pub priority: &'static str,
}

/// Próximo servicio (fecha mínima >= hoy) por matrícula.
/// Solo una fecha estrictamente menor reemplaza a la ya registrada.
pub fn next_service_map(
    rows: &[ScheduledService],
    today: NaiveDate,
) -> HashMap<String, NextService> {
    let mut map: HashMap<String, NextService> = HashMap::new();
    for row in rows {
        if row.vehicle.is_empty() || row.date < today {
            continue;
        }
        let replace = match map.get(&row.vehicle) {
            Some(current) => row.date < current.date,
            None => true,
        };
        if replace {
            map.insert(
                row.vehicle.clone(),
                NextService {
                    date: row.date,
                    service: row.service.clone(),
                },
            );
        }
    }
    map
}

/// Servicios estrictamente futuros, ordenados por fecha, hasta `limit`.
/// A diferencia del mapa de próximos servicios, hoy no cuenta.
pub fn upcoming_services(
    rows: &[ScheduledService],
    today: NaiveDate,
    limit: usize,
) -> Vec<UpcomingService> {
    let mut upcoming: Vec<&ScheduledService> =
        rows.iter().filter(|row| row.date > today).collect();
    upcoming.sort_by_key(|row| row.date);
    upcoming
        .into_iter()
        .take(limit)
        .map(|row| UpcomingService {
            vehicle: row.vehicle.clone(),
            service: row.service.clone(),
            due: row.date,
            priority: "medium",
        })
        .collect()
}

/// Matrículas con al menos un servicio agendado, sin duplicados,
/// en orden de aparición
pub fn scheduled_plates(rows: &[ScheduledService]) -> Vec<String> {
    let mut plates: Vec<String> = Vec::new();
    for row in rows {
        if !plates.iter().any(|p| p == &row.vehicle) {
            plates.push(row.vehicle.clone());
        }
    }
    plates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(vehicle: &str, date: &str, service: Option<&str>) -> ScheduledService {
        ScheduledService {
            vehicle: vehicle.to_string(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            service: service.map(|s| s.to_string()),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 7).unwrap()
    }

    #[test]
    fn test_next_service_picks_earliest_per_vehicle() {
        let rows = vec![
            row("CA123456", "2026-09-01", Some("Brake check")),
            row("CA123456", "2026-08-15", Some("Oil change")),
            row("GP777888", "2026-10-01", None),
        ];
        let map = next_service_map(&rows, today());
        assert_eq!(map.len(), 2);
        assert_eq!(map["CA123456"].date.to_string(), "2026-08-15");
        assert_eq!(map["CA123456"].service.as_deref(), Some("Oil change"));
        assert_eq!(map["GP777888"].date.to_string(), "2026-10-01");
    }

    #[test]
    fn test_next_service_includes_today_excludes_past() {
        let rows = vec![
            row("CA123456", "2026-08-07", Some("Today")),
            row("GP777888", "2026-08-06", Some("Yesterday")),
        ];
        let map = next_service_map(&rows, today());
        assert_eq!(map.len(), 1);
        assert_eq!(map["CA123456"].service.as_deref(), Some("Today"));
    }

    #[test]
    fn test_next_service_tie_keeps_first_row() {
        let rows = vec![
            row("CA123456", "2026-08-15", Some("First")),
            row("CA123456", "2026-08-15", Some("Second")),
        ];
        let map = next_service_map(&rows, today());
        assert_eq!(map["CA123456"].service.as_deref(), Some("First"));
    }

    #[test]
    fn test_upcoming_excludes_today_and_limits() {
        let rows = vec![
            row("A1", "2026-08-07", None),
            row("B2", "2026-08-20", None),
            row("C3", "2026-08-10", None),
            row("D4", "2026-09-01", None),
            row("E5", "2026-08-25", None),
        ];
        let upcoming = upcoming_services(&rows, today(), 3);
        let vehicles: Vec<&str> = upcoming.iter().map(|u| u.vehicle.as_str()).collect();
        assert_eq!(vehicles, vec!["C3", "B2", "E5"]);
        assert!(upcoming.iter().all(|u| u.priority == "medium"));
    }

    #[test]
    fn test_scheduled_plates_dedup_in_order() {
        let rows = vec![
            row("CA123456", "2026-08-10", None),
            row("GP777888", "2026-08-11", None),
            row("CA123456", "2026-08-12", None),
        ];
        assert_eq!(scheduled_plates(&rows), vec!["CA123456", "GP777888"]);
    }
}
