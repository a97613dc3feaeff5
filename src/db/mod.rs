//! Estado compartido y operaciones de base de datos.
//!
//! Un submódulo por entidad, cada uno con sus consultas como métodos de
//! `AppState`:
//! - `cliente`, `expediente`, `actuacion`, `cita`, `documento`

mod actuacion;
mod cita;
mod cliente;
mod documento;
mod expediente;

use std::env;
use std::path::PathBuf;

use sqlx::PgPool;

/// Directorio por defecto donde se guardan los reportes generados.
const REPORTS_DIR_POR_DEFECTO: &str = "./reportes";

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    /// Directorio base de los reportes PDF generados.
    pub reports_dir: PathBuf,
}

impl AppState {
    pub async fn new() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();
        let database_url = env::var("DATABASE_URL")?;

        let pool = sqlx::postgres::PgPoolOptions::new()
            .max_connections(20)
            .acquire_timeout(std::time::Duration::from_secs(30))
            .idle_timeout(std::time::Duration::from_secs(900))
            .connect(&database_url)
            .await?;

        let reports_dir = env::var("REPORTS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(REPORTS_DIR_POR_DEFECTO));

        Ok(AppState { pool, reports_dir })
    }

    /// Construye el estado sobre un pool ya creado. Pensado para tests de
    /// integración que traen su propia base de datos y directorio temporal.
    pub fn new_with_pool(pool: PgPool, reports_dir: PathBuf) -> Self {
        AppState { pool, reports_dir }
    }
}
