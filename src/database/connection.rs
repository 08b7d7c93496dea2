//! Configuración de conexión a SQLite
//!
//! Este módulo maneja el pool de conexiones sobre el archivo SQLite.

use std::str::FromStr;

use anyhow::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Conexión a la base de datos de la aplicación
pub struct DatabaseConnection {
    pool: SqlitePool,
}

impl DatabaseConnection {
    /// Crear un pool de conexiones sobre la URL indicada
    pub async fn new(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// Crear el pool usando DATABASE_URL del entorno, o el archivo por defecto
    pub async fn new_default() -> Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:punctuality.db".to_string());
        Self::new(&database_url).await
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
