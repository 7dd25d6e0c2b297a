use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

use crate::controllers::maintenance_controller::MaintenanceController;
use crate::dto::maintenance_dto::{
    LogMaintenanceRequest, MaintenanceResponse, ScheduleMaintenanceRequest,
};
use crate::dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_maintenance_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_maintenance))
        .route("/scheduled", get(scheduled_vehicles))
        .route("/log", post(log_maintenance))
        .route("/schedule", post(schedule_maintenance))
}

async fn list_maintenance(
    State(state): State<AppState>,
) -> Result<Json<Vec<MaintenanceResponse>>, AppError> {
    let controller = MaintenanceController::new(state.supabase.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn scheduled_vehicles(State(state): State<AppState>) -> Result<Json<Vec<String>>, AppError> {
    let controller = MaintenanceController::new(state.supabase.clone());
    let response = controller.scheduled_vehicles().await?;
    Ok(Json(response))
}

async fn log_maintenance(
    State(state): State<AppState>,
    Json(request): Json<LogMaintenanceRequest>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = MaintenanceController::new(state.supabase.clone());
    let message = controller.log(request).await?;
    Ok(Json(ApiResponse::success_with_message((), message)))
}

async fn schedule_maintenance(
    State(state): State<AppState>,
    Json(request): Json<ScheduleMaintenanceRequest>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = MaintenanceController::new(state.supabase.clone());
    let message = controller.schedule(request).await?;
    Ok(Json(ApiResponse::success_with_message((), message)))
}
