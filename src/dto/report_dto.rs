use rust_decimal::Decimal;
use serde::Serialize;

// Resumen de reportes
#[derive(Debug, Serialize)]
pub struct ReportSummaryResponse {
    pub total_trips: usize,
    pub maintenance_total: Decimal,
    // Porcentaje de la flota en uso
    pub average_utilization: f64,
}
