use axum::{extract::State, routing::get, Json, Router};

use crate::controllers::dashboard_controller::DashboardController;
use crate::dto::dashboard_dto::DashboardResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_dashboard_router() -> Router<AppState> {
    Router::new().route("/", get(dashboard_overview))
}

async fn dashboard_overview(
    State(state): State<AppState>,
) -> Result<Json<DashboardResponse>, AppError> {
    let controller = DashboardController::new(state.supabase.clone());
    let response = controller.overview().await?;
    Ok(Json(response))
}
