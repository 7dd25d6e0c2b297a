use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post},
    Json, Router,
};

use crate::controllers::driver_controller::DriverController;
use crate::dto::driver_dto::{CreateDriverRequest, DriverQuery, DriverResponse};
use crate::dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_driver_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_driver))
        .route("/", get(list_drivers))
        .route("/:id", delete(delete_driver))
}

async fn create_driver(
    State(state): State<AppState>,
    Json(request): Json<CreateDriverRequest>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = DriverController::new(state.supabase.clone());
    let message = controller.create(request).await?;
    Ok(Json(ApiResponse::success_with_message((), message)))
}

async fn list_drivers(
    State(state): State<AppState>,
    Query(query): Query<DriverQuery>,
) -> Result<Json<Vec<DriverResponse>>, AppError> {
    let controller = DriverController::new(state.supabase.clone());
    let response = controller.list(query).await?;
    Ok(Json(response))
}

async fn delete_driver(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = DriverController::new(state.supabase.clone());
    let message = controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": message
    })))
}
