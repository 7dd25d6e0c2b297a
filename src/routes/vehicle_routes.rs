use axum::{
    extract::{Path, Query, State},
    routing::{get, post, put},
    Json, Router,
};

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::vehicle_dto::{
    CreateVehicleRequest, UpdateVehicleStatusRequest, VehicleDetailResponse, VehicleQuery,
    VehicleResponse,
};
use crate::dto::ApiResponse;
use crate::models::maintenance::MaintenanceRecord;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_vehicle))
        .route("/", get(list_vehicles))
        .route("/:plate", get(get_vehicle))
        .route("/:plate/maintenance", get(vehicle_maintenance))
        .route("/:plate/status", put(update_vehicle_status))
}

async fn create_vehicle(
    State(state): State<AppState>,
    Json(request): Json<CreateVehicleRequest>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = VehicleController::new(state.supabase.clone());
    let message = controller.create(request).await?;
    Ok(Json(ApiResponse::success_with_message((), message)))
}

async fn list_vehicles(
    State(state): State<AppState>,
    Query(query): Query<VehicleQuery>,
) -> Result<Json<Vec<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.supabase.clone());
    let response = controller.list(query).await?;
    Ok(Json(response))
}

async fn get_vehicle(
    State(state): State<AppState>,
    Path(plate): Path<String>,
) -> Result<Json<VehicleDetailResponse>, AppError> {
    let controller = VehicleController::new(state.supabase.clone());
    let response = controller.detail(&plate).await?;
    Ok(Json(response))
}

async fn vehicle_maintenance(
    State(state): State<AppState>,
    Path(plate): Path<String>,
) -> Result<Json<Vec<MaintenanceRecord>>, AppError> {
    let controller = VehicleController::new(state.supabase.clone());
    let response = controller.maintenance_history(&plate).await?;
    Ok(Json(response))
}

async fn update_vehicle_status(
    State(state): State<AppState>,
    Path(plate): Path<String>,
    Json(request): Json<UpdateVehicleStatusRequest>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = VehicleController::new(state.supabase.clone());
    let message = controller.set_status(&plate, request).await?;
    Ok(Json(ApiResponse::success_with_message((), message)))
}
