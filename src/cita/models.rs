use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Cita o evento programado asociado a un expediente.
#[derive(Debug, Serialize, Deserialize, Clone, sqlx::FromRow, ToSchema)]
pub struct Cita {
    pub id: i32,
    pub expediente_id: i32,
    #[schema(example = "Vista oral")]
    pub titulo: String,
    pub descripcion: Option<String>,
    pub fecha_inicio: NaiveDateTime,
    pub fecha_fin: NaiveDateTime,
    pub lugar: Option<String>,
    #[schema(example = "Vista")]
    pub tipo_cita: String,
    pub participantes: Option<String>,
    pub completada: bool,
    pub observaciones: Option<String>,
    pub fecha_creacion: NaiveDateTime,
    pub fecha_modificacion: Option<NaiveDateTime>,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct CreateCitaRequest {
    pub expediente_id: i32,
    pub titulo: String,
    pub descripcion: Option<String>,
    pub fecha_inicio: NaiveDateTime,
    pub fecha_fin: NaiveDateTime,
    pub lugar: Option<String>,
    pub tipo_cita: String,
    pub participantes: Option<String>,
    pub observaciones: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct UpdateCitaRequest {
    pub titulo: Option<String>,
    pub descripcion: Option<String>,
    pub fecha_inicio: Option<NaiveDateTime>,
    pub fecha_fin: Option<NaiveDateTime>,
    pub lugar: Option<String>,
    pub tipo_cita: Option<String>,
    pub participantes: Option<String>,
    pub completada: Option<bool>,
    pub observaciones: Option<String>,
}

/// Rango de fechas de consulta sobre el inicio de la cita, ambos extremos
/// incluidos.
#[derive(Debug, Deserialize)]
pub struct RangoFechasQuery {
    pub fecha_inicio: NaiveDateTime,
    pub fecha_fin: NaiveDateTime,
}
