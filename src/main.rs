use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use fleet_management::config::environment::EnvironmentConfig;
use fleet_management::middleware::cors::{cors_middleware, cors_middleware_with_origins};
use fleet_management::routes;
use fleet_management::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚛 FindMyFleet - Vehicle Fleet Management API");
    info!("=============================================");

    let config = EnvironmentConfig::default();

    // Cliente del backend hosteado. Si faltan credenciales el proceso
    // arranca igual en modo degradado.
    let supabase = AppState::supabase_from_config(&config);
    if supabase.is_configured() {
        info!("✅ Backend hosteado configurado");
    } else {
        error!("⚠️ Backend hosteado sin configurar: las llamadas de datos devolverán 503");
    }

    let cors = if config.is_development() || config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(config.cors_origins.clone())
    };

    let app_state = AppState::new(config, supabase);
    let addr: SocketAddr =
        format!("{}:{}", app_state.config.host, app_state.config.port).parse()?;

    let app = Router::new()
        .route("/test", get(test_endpoint))
        .merge(routes::create_api_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /test - Endpoint de prueba");
    info!("🔐 Auth:");
    info!("   POST /api/auth/login - Login contra el backend hosteado");
    info!("🚗 Fleet:");
    info!("   GET  /api/vehicle - Listar vehículos (search/status en memoria)");
    info!("   POST /api/vehicle - Registrar vehículo");
    info!("   GET  /api/vehicle/:plate - Detalle con próximo servicio");
    info!("   GET  /api/vehicle/:plate/maintenance - Historial de mantenimiento");
    info!("   PUT  /api/vehicle/:plate/status - Cambiar estado");
    info!("🧑 Drivers:");
    info!("   GET  /api/driver - Listar conductores");
    info!("   POST /api/driver - Registrar conductor");
    info!("   DELETE /api/driver/:id - Eliminar conductor");
    info!("🗺️ Trips:");
    info!("   GET  /api/trip - Log de viajes con resumen");
    info!("   GET  /api/trip/options - Vehículos y conductores disponibles");
    info!("   POST /api/trip - Asignar viaje");
    info!("   POST /api/trip/:id/complete - Completar viaje");
    info!("🔧 Maintenance:");
    info!("   GET  /api/maintenance - Registros con próximo servicio");
    info!("   GET  /api/maintenance/scheduled - Matrículas con servicio agendado");
    info!("   POST /api/maintenance/log - Registrar servicio");
    info!("   POST /api/maintenance/schedule - Agendar servicio");
    info!("📊 Dashboard y Reports:");
    info!("   GET  /api/dashboard - KPIs, costos y próximos servicios");
    info!("   GET  /api/report/summary - Resumen de reportes");
    info!("   GET  /api/report/monthly-trends - Tendencias mensuales");
    info!("   GET  /api/report/utilization - Utilización por vehículo");
    info!("   GET  /api/report/export - Export CSV de utilización");

    // Iniciar servidor en background
    let server_handle = tokio::spawn(async move {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                error!("❌ Error del servidor: {}", e);
                e
            })
    });

    // Esperar a que el servidor termine
    if let Err(e) = server_handle.await? {
        error!("❌ Servidor terminó con error: {}", e);
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Endpoint de prueba simple
async fn test_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "message": "¡API de FindMyFleet funcionando correctamente!",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
