//! Generador de datos de demostración
//!
//! Puebla la base con trayectos ficticios para un período, por defecto
//! 2025-07-01 a 2025-07-08, salteando los domingos.

use anyhow::Result;
use chrono::NaiveDate;
use dotenvy::dotenv;
use tracing::info;

use bus_punctuality::database::{schema, DatabaseConnection};
use bus_punctuality::services::sample_data_service;
use bus_punctuality::utils::validation::validate_date;

const DEFAULT_START: &str = "2025-07-01";
const DEFAULT_END: &str = "2025-07-08";

fn parse_date_arg(value: Option<String>, fallback: &str) -> Result<NaiveDate> {
    let raw = value.unwrap_or_else(|| fallback.to_string());
    validate_date(&raw)
        .map_err(|_| anyhow::anyhow!("Fecha inválida '{}', se espera YYYY-MM-DD", raw))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let mut args = std::env::args().skip(1);
    let start = parse_date_arg(args.next(), DEFAULT_START)?;
    let end = parse_date_arg(args.next(), DEFAULT_END)?;

    info!("🚌 Generador de datos de demostración");
    info!("📅 Período: {} a {} (sin domingos)", start, end);

    let db_connection = DatabaseConnection::new_default().await?;
    let pool = db_connection.pool().clone();
    schema::initialize(&pool).await?;

    let inserted = sample_data_service::seed_demo_trips(&pool, start, end).await?;

    info!("🎉 Datos de demostración generados");
    info!("📊 Total de trayectos creados: {}", inserted);
    info!("⚡ Distribución: 70% en horario, resto con desvíos de hasta 10 minutos");

    Ok(())
}
