pub mod auth_routes;
pub mod dashboard_routes;
pub mod driver_routes;
pub mod maintenance_routes;
pub mod report_routes;
pub mod trip_routes;
pub mod vehicle_routes;

use axum::Router;

use crate::state::AppState;

/// Crear el router principal de la API
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/api/auth", auth_routes::create_auth_router())
        .nest("/api/vehicle", vehicle_routes::create_vehicle_router())
        .nest("/api/driver", driver_routes::create_driver_router())
        .nest("/api/trip", trip_routes::create_trip_router())
        .nest("/api/maintenance", maintenance_routes::create_maintenance_router())
        .nest("/api/dashboard", dashboard_routes::create_dashboard_router())
        .nest("/api/report", report_routes::create_report_router())
}
