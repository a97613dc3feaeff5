//! Agregador de expedientes agrupados por estado.

use chrono::NaiveDateTime;

use crate::expediente::models::Estado;

/// Fila del reporte: expediente con el nombre de su cliente y el conteo de
/// actuaciones ya materializados.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ExpedienteEstadoRow {
    pub id: i32,
    pub numero_expediente: String,
    pub asunto: String,
    pub estado: Estado,
    pub fecha_apertura: NaiveDateTime,
    pub cliente_nombre: String,
    pub cliente_apellidos: String,
    pub num_actuaciones: i64,
}

/// Sección del reporte: un estado con sus expedientes. Solo existen
/// secciones para estados con al menos un expediente.
#[derive(Debug)]
pub struct GrupoEstado {
    pub estado: Estado,
    pub expedientes: Vec<ExpedienteEstadoRow>,
}

/// Datos agregados del reporte de expedientes por estado.
#[derive(Debug)]
pub struct ExpedientesPorEstado {
    pub total_expedientes: usize,
    /// Conteo por cada uno de los cinco estados, incluidos los vacíos,
    /// en orden de ciclo de vida. Alimenta las tarjetas de resumen.
    pub conteos: [(Estado, usize); 5],
    pub grupos: Vec<GrupoEstado>,
}

/// Ordena por estado ascendente y fecha de apertura descendente dentro de
/// cada estado, y agrupa. El orden de recuperación se conserva en empates.
pub fn agregar_por_estado(mut filas: Vec<ExpedienteEstadoRow>) -> ExpedientesPorEstado {
    filas.sort_by(|a, b| {
        a.estado
            .cmp(&b.estado)
            .then_with(|| b.fecha_apertura.cmp(&a.fecha_apertura))
    });

    let total_expedientes = filas.len();
    let conteos = Estado::TODOS
        .map(|estado| (estado, filas.iter().filter(|e| e.estado == estado).count()));

    let mut grupos: Vec<GrupoEstado> = Vec::new();
    for fila in filas {
        match grupos.last_mut() {
            Some(grupo) if grupo.estado == fila.estado => grupo.expedientes.push(fila),
            _ => grupos.push(GrupoEstado {
                estado: fila.estado,
                expedientes: vec![fila],
            }),
        }
    }

    ExpedientesPorEstado {
        total_expedientes,
        conteos,
        grupos,
    }
}
