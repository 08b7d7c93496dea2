use std::net::SocketAddr;

use anyhow::Result;
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info};

use bus_punctuality::app::build_router;
use bus_punctuality::config::environment::EnvironmentConfig;
use bus_punctuality::database::{schema, DatabaseConnection};
use bus_punctuality::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚌 Sistema de Puntualidad de Buses - API");
    info!("========================================");

    let config = EnvironmentConfig::default();
    if config.is_development() {
        info!("🔧 Entorno de desarrollo");
    }

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new(&config.database_url).await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };
    let pool = db_connection.pool().clone();

    // Crear tablas y sembrar rutas por defecto
    if let Err(e) = schema::initialize(&pool).await {
        error!("❌ Error inicializando el esquema: {}", e);
        return Err(anyhow::anyhow!("Error de esquema: {}", e));
    }

    let addr: SocketAddr = config.server_addr().parse()?;
    let state = AppState::new(pool, config);
    let app = build_router(state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /test - Endpoint de prueba");
    info!("🛣️  Rutas:");
    info!("   GET    /api/routes - Listar rutas");
    info!("   POST   /api/routes - Crear ruta");
    info!("   PUT    /api/routes/:id - Actualizar ruta");
    info!("   DELETE /api/routes/:id - Eliminar ruta");
    info!("🚍 Trayectos:");
    info!("   GET    /api/trips - Listar trayectos (route_id, date_start, date_end, shift)");
    info!("   POST   /api/trips - Registrar trayecto");
    info!("   PUT    /api/trips/:id - Actualizar trayecto");
    info!("   DELETE /api/trips/:id - Eliminar trayecto");
    info!("📊 Reportes:");
    info!("   GET  /api/reports/delays - Reporte de atrasos (positive_only opcional)");
    info!("   GET  /api/reports/summary - Resumen operativo");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Servidor terminado");
    Ok(())
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
