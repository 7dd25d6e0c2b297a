//! Agregados para reportes y exportación CSV
//!
//! Cálculos en memoria sobre filas traídas del backend: utilización por
//! vehículo, tendencias de los últimos meses y el render CSV del export.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;

use crate::models::maintenance::MaintenanceRecord;
use crate::models::trip::Trip;
use crate::models::vehicle::{Vehicle, VehicleStatus};

/// Columnas fijas del export de utilización
pub const UTILIZATION_COLUMNS: [&str; 3] = ["vehicle", "trips", "maintenance_cost"];

/// Fila del reporte de utilización por vehículo
#[derive(Debug, Serialize)]
pub struct UtilizationRow {
    pub vehicle: String,
    pub trips: usize,
    pub maintenance_cost: Decimal,
}

/// Punto de la serie mensual (viajes y costo de mantenimiento)
#[derive(Debug, Serialize)]
pub struct MonthlyTrend {
    pub month: String,
    pub trips: usize,
    pub maintenance: Decimal,
}

/// Viajes y costo acumulado por matrícula, en el orden de la flota
pub fn utilization_rows(
    vehicles: &[Vehicle],
    trips: &[Trip],
    maintenance: &[MaintenanceRecord],
) -> Vec<UtilizationRow> {
    vehicles
        .iter()
        .map(|vehicle| UtilizationRow {
            vehicle: vehicle.plate.clone(),
            trips: trips.iter().filter(|t| t.vehicle == vehicle.plate).count(),
            maintenance_cost: maintenance
                .iter()
                .filter(|m| m.vehicle == vehicle.plate)
                .map(|m| m.cost)
                .sum(),
        })
        .collect()
}

/// Serie de los últimos `months` meses calendario (el actual incluido),
/// del más antiguo al más reciente
pub fn monthly_trends(
    trips: &[Trip],
    maintenance: &[MaintenanceRecord],
    today: NaiveDate,
    months: u32,
) -> Vec<MonthlyTrend> {
    let mut series = Vec::new();
    for offset in (0..months).rev() {
        let (year, month) = shift_month(today.year(), today.month(), offset);
        let label = NaiveDate::from_ymd_opt(year, month, 1)
            .map(|d| d.format("%b").to_string())
            .unwrap_or_default();
        series.push(MonthlyTrend {
            month: label,
            trips: trips
                .iter()
                .filter(|t| t.date.year() == year && t.date.month() == month)
                .count(),
            maintenance: maintenance
                .iter()
                .filter(|m| m.date.year() == year && m.date.month() == month)
                .map(|m| m.cost)
                .sum(),
        });
    }
    series
}

/// Porcentaje de la flota en uso (0 si no hay vehículos)
pub fn average_utilization(vehicles: &[Vehicle]) -> f64 {
    if vehicles.is_empty() {
        return 0.0;
    }
    let in_use = vehicles
        .iter()
        .filter(|v| v.status == VehicleStatus::InUse)
        .count();
    in_use as f64 * 100.0 / vehicles.len() as f64
}

/// Render CSV: cada celda es el literal JSON del valor (strings entre
/// comillas, números sin), y los valores ausentes o null quedan como ""
pub fn to_csv(rows: &[Value], columns: &[&str]) -> String {
    let header = columns.join(",");
    let body = rows
        .iter()
        .map(|row| {
            columns
                .iter()
                .map(|column| {
                    let cell = row.get(*column).cloned().unwrap_or(Value::Null);
                    let cell = if cell.is_null() {
                        Value::String(String::new())
                    } else {
                        cell
                    };
                    serde_json::to_string(&cell).unwrap_or_default()
                })
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!("{}\n{}", header, body)
}

/// Retroceder `offset` meses desde (year, month)
fn shift_month(year: i32, month: u32, offset: u32) -> (i32, u32) {
    let total = year * 12 + month as i32 - 1 - offset as i32;
    (total.div_euclid(12), (total.rem_euclid(12) + 1) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::trip::TripStatus;
    use serde_json::json;

    fn date(value: &str) -> NaiveDate {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
    }

    fn vehicle(plate: &str, status: VehicleStatus) -> Vehicle {
        Vehicle {
            id: 1,
            plate: plate.to_string(),
            make: "Toyota".to_string(),
            model: "Hilux".to_string(),
            year: 2022,
            status,
            registration_date: None,
            location: None,
        }
    }

    fn trip(vehicle: &str, day: &str) -> Trip {
        Trip {
            id: 1,
            vehicle: vehicle.to_string(),
            driver_id: None,
            origin: "Cape Town".to_string(),
            destination: "Durban".to_string(),
            date: date(day),
            status: TripStatus::Completed,
        }
    }

    fn record(vehicle: &str, day: &str, cost: i64) -> MaintenanceRecord {
        MaintenanceRecord {
            id: 1,
            vehicle: vehicle.to_string(),
            service: "Oil change".to_string(),
            date: date(day),
            cost: Decimal::new(cost, 0),
            provider: "Speedy".to_string(),
        }
    }

    #[test]
    fn test_utilization_rows() {
        let vehicles = vec![
            vehicle("CA123456", VehicleStatus::InUse),
            vehicle("GP777888", VehicleStatus::Available),
        ];
        let trips = vec![
            trip("CA123456", "2026-08-01"),
            trip("CA123456", "2026-07-15"),
            trip("GP777888", "2026-08-02"),
        ];
        let maintenance = vec![record("CA123456", "2026-06-01", 1500)];

        let rows = utilization_rows(&vehicles, &trips, &maintenance);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].trips, 2);
        assert_eq!(rows[0].maintenance_cost, Decimal::new(1500, 0));
        assert_eq!(rows[1].trips, 1);
        assert_eq!(rows[1].maintenance_cost, Decimal::ZERO);
    }

    #[test]
    fn test_monthly_trends_buckets_and_order() {
        let trips = vec![
            trip("CA123456", "2026-08-01"),
            trip("CA123456", "2026-07-15"),
            trip("CA123456", "2026-03-01"),
            // Fuera de la ventana de 6 meses
            trip("CA123456", "2026-02-28"),
        ];
        let maintenance = vec![record("CA123456", "2026-07-20", 2800)];

        let series = monthly_trends(&trips, &maintenance, date("2026-08-07"), 6);
        assert_eq!(series.len(), 6);
        assert_eq!(series[0].month, "Mar");
        assert_eq!(series[0].trips, 1);
        assert_eq!(series[5].month, "Aug");
        assert_eq!(series[5].trips, 1);
        assert_eq!(series[4].month, "Jul");
        assert_eq!(series[4].maintenance, Decimal::new(2800, 0));
    }

    #[test]
    fn test_monthly_trends_crosses_year_boundary() {
        let series = monthly_trends(&[], &[], date("2026-02-10"), 6);
        let labels: Vec<&str> = series.iter().map(|p| p.month.as_str()).collect();
        assert_eq!(labels, vec!["Sep", "Oct", "Nov", "Dec", "Jan", "Feb"]);
    }

    #[test]
    fn test_average_utilization() {
        assert_eq!(average_utilization(&[]), 0.0);
        let vehicles = vec![
            vehicle("A1", VehicleStatus::InUse),
            vehicle("B2", VehicleStatus::InUse),
            vehicle("C3", VehicleStatus::Available),
            vehicle("D4", VehicleStatus::Maintenance),
        ];
        assert_eq!(average_utilization(&vehicles), 50.0);
    }

    #[test]
    fn test_to_csv_quotes_like_json() {
        let rows = vec![
            json!({"vehicle": "CA123456", "trips": 28, "maintenance_cost": 1500.5}),
            json!({"vehicle": "GP 777", "trips": 0, "maintenance_cost": null}),
        ];
        let csv = to_csv(&rows, &UTILIZATION_COLUMNS);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "vehicle,trips,maintenance_cost");
        assert_eq!(lines[1], "\"CA123456\",28,1500.5");
        assert_eq!(lines[2], "\"GP 777\",0,\"\"");
    }
}
