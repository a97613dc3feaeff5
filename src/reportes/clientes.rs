//! Agregador del directorio de clientes.

use std::collections::HashSet;

/// Fila del directorio: cliente con su número de expedientes asociados.
/// La capa de datos ya entrega el conteo materializado, sin consultas N+1.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ClienteDirectorioRow {
    pub id: i32,
    pub nombre: String,
    pub apellidos: String,
    pub dni_cif: String,
    pub telefono: Option<String>,
    pub email: Option<String>,
    pub ciudad: Option<String>,
    pub num_expedientes: i64,
}

/// Datos agregados del reporte de clientes, listos para componer.
#[derive(Debug)]
pub struct DirectorioClientes {
    /// Clientes ordenados por (apellidos, nombre) ascendente.
    pub clientes: Vec<ClienteDirectorioRow>,
    pub total_clientes: usize,
    pub total_expedientes: i64,
    pub ciudades_distintas: usize,
    pub media_expedientes: f64,
}

/// Ordena y deriva las estadísticas del directorio. Las filas llegan en orden
/// de recuperación (id ascendente); el orden se conserva en los empates.
pub fn agregar_directorio(mut filas: Vec<ClienteDirectorioRow>) -> DirectorioClientes {
    filas.sort_by(|a, b| {
        (a.apellidos.to_lowercase(), a.nombre.to_lowercase())
            .cmp(&(b.apellidos.to_lowercase(), b.nombre.to_lowercase()))
    });

    let total_clientes = filas.len();
    let total_expedientes: i64 = filas.iter().map(|c| c.num_expedientes).sum();
    let ciudades_distintas = filas
        .iter()
        .filter_map(|c| c.ciudad.as_deref())
        .filter(|c| !c.is_empty())
        .collect::<HashSet<_>>()
        .len();
    let media_expedientes = if total_clientes > 0 {
        total_expedientes as f64 / total_clientes as f64
    } else {
        0.0
    };

    DirectorioClientes {
        clientes: filas,
        total_clientes,
        total_expedientes,
        ciudades_distintas,
        media_expedientes,
    }
}
