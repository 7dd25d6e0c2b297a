use rust_decimal::Decimal;
use serde::Serialize;

use crate::services::schedule_service::UpcomingService;

// KPIs de la flota
#[derive(Debug, Serialize)]
pub struct DashboardKpis {
    pub total_vehicles: usize,
    pub available_vehicles: usize,
    pub in_maintenance: usize,
    pub active_drivers: usize,
}

// Costo de mantenimiento acumulado por vehículo
#[derive(Debug, Serialize)]
pub struct VehicleCost {
    pub vehicle: String,
    pub cost: Decimal,
}

// Porción del gráfico de utilización
#[derive(Debug, Serialize)]
pub struct UtilizationSlice {
    pub name: String,
    pub value: usize,
}

// Response completa del dashboard
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub kpis: DashboardKpis,
    pub maintenance_cost_by_vehicle: Vec<VehicleCost>,
    pub utilization: Vec<UtilizationSlice>,
    pub upcoming_services: Vec<UpcomingService>,
}
