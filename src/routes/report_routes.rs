use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use crate::controllers::report_controller::{ReportController, EXPORT_FILENAME};
use crate::dto::report_dto::ReportSummaryResponse;
use crate::dto::ApiResponse;
use crate::services::report_service::{MonthlyTrend, UtilizationRow};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_report_router() -> Router<AppState> {
    Router::new()
        .route("/summary", get(report_summary))
        .route("/monthly-trends", get(monthly_trends))
        .route("/utilization", get(utilization))
        .route("/export", get(export_report))
}

async fn report_summary(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<ReportSummaryResponse>>, AppError> {
    let controller = ReportController::new(state.supabase.clone());
    let response = controller.summary().await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn monthly_trends(
    State(state): State<AppState>,
) -> Result<Json<Vec<MonthlyTrend>>, AppError> {
    let controller = ReportController::new(state.supabase.clone());
    let response = controller.monthly_trends().await?;
    Ok(Json(response))
}

async fn utilization(State(state): State<AppState>) -> Result<Json<Vec<UtilizationRow>>, AppError> {
    let controller = ReportController::new(state.supabase.clone());
    let response = controller.utilization().await?;
    Ok(Json(response))
}

/// Descarga del reporte de utilización como archivo CSV
async fn export_report(State(state): State<AppState>) -> Result<Response, AppError> {
    let controller = ReportController::new(state.supabase.clone());
    let csv = controller.export_csv().await?;

    let headers = [
        (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", EXPORT_FILENAME),
        ),
    ];
    Ok((headers, csv).into_response())
}
