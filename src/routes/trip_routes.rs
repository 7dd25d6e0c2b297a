use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};

use crate::controllers::trip_controller::TripController;
use crate::dto::trip_dto::{CreateTripRequest, TripListResponse, TripOptionsResponse};
use crate::dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_trip_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_trip))
        .route("/", get(list_trips))
        .route("/options", get(trip_options))
        .route("/:id/complete", post(complete_trip))
}

async fn create_trip(
    State(state): State<AppState>,
    Json(request): Json<CreateTripRequest>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = TripController::new(state.supabase.clone());
    let message = controller.create(request).await?;
    Ok(Json(ApiResponse::success_with_message((), message)))
}

async fn list_trips(State(state): State<AppState>) -> Result<Json<TripListResponse>, AppError> {
    let controller = TripController::new(state.supabase.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn trip_options(State(state): State<AppState>) -> Result<Json<TripOptionsResponse>, AppError> {
    let controller = TripController::new(state.supabase.clone());
    let response = controller.options().await?;
    Ok(Json(response))
}

async fn complete_trip(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = TripController::new(state.supabase.clone());
    let message = controller.complete(id).await?;
    Ok(Json(ApiResponse::success_with_message((), message)))
}
