//! Agregador de actuaciones agrupadas por expediente.

use std::collections::HashSet;

use chrono::NaiveDateTime;

use crate::expediente::models::Estado;

/// Cabecera de un expediente con actividad registrada.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ExpedienteActividadRow {
    pub id: i32,
    pub numero_expediente: String,
    pub asunto: String,
    pub estado: Estado,
    pub cliente_nombre: String,
    pub cliente_apellidos: String,
}

/// Actuación reducida a los campos que muestra el reporte.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ActuacionReporteRow {
    pub id: i32,
    pub expediente_id: i32,
    pub fecha_actuacion: NaiveDateTime,
    pub tipo_actuacion: String,
    pub descripcion: String,
}

/// Expediente con sus actuaciones ordenadas por fecha descendente.
#[derive(Debug)]
pub struct ExpedienteConActuaciones {
    pub expediente: ExpedienteActividadRow,
    pub actuaciones: Vec<ActuacionReporteRow>,
}

/// Datos agregados del reporte de actuaciones por expediente.
#[derive(Debug)]
pub struct ActuacionesPorExpediente {
    pub expedientes: Vec<ExpedienteConActuaciones>,
    pub total_actuaciones: usize,
    pub tipos_distintos: usize,
    pub media_por_expediente: f64,
}

/// Agrupa las actuaciones bajo su expediente. Los expedientes sin ninguna
/// actuación quedan fuera del reporte. Ordena expedientes por número
/// ascendente y actuaciones por fecha descendente, de forma estable.
pub fn agregar_actuaciones(
    mut expedientes: Vec<ExpedienteActividadRow>,
    mut actuaciones: Vec<ActuacionReporteRow>,
) -> ActuacionesPorExpediente {
    expedientes.sort_by(|a, b| a.numero_expediente.cmp(&b.numero_expediente));
    actuaciones.sort_by(|a, b| b.fecha_actuacion.cmp(&a.fecha_actuacion));

    let agrupados: Vec<ExpedienteConActuaciones> = expedientes
        .into_iter()
        .filter_map(|expediente| {
            let propias: Vec<ActuacionReporteRow> = actuaciones
                .iter()
                .filter(|a| a.expediente_id == expediente.id)
                .cloned()
                .collect();
            if propias.is_empty() {
                None
            } else {
                Some(ExpedienteConActuaciones {
                    expediente,
                    actuaciones: propias,
                })
            }
        })
        .collect();

    let total_actuaciones: usize = agrupados.iter().map(|e| e.actuaciones.len()).sum();
    let tipos_distintos = agrupados
        .iter()
        .flat_map(|e| e.actuaciones.iter())
        .map(|a| a.tipo_actuacion.as_str())
        .collect::<HashSet<_>>()
        .len();

    let media_por_expediente = if agrupados.is_empty() {
        0.0
    } else {
        total_actuaciones as f64 / agrupados.len() as f64
    };

    ActuacionesPorExpediente {
        expedientes: agrupados,
        total_actuaciones,
        tipos_distintos,
        media_por_expediente,
    }
}
