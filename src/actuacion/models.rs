use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Actuación o seguimiento registrado dentro de un expediente.
#[derive(Debug, Serialize, Deserialize, Clone, sqlx::FromRow, ToSchema)]
pub struct Actuacion {
    pub id: i32,
    pub expediente_id: i32,
    pub fecha_actuacion: NaiveDateTime,
    #[schema(example = "Escrito")]
    pub tipo_actuacion: String,
    pub descripcion: String,
    pub resultado: Option<String>,
    pub responsable: Option<String>,
    pub observaciones: Option<String>,
    pub fecha_registro: NaiveDateTime,
    pub fecha_modificacion: Option<NaiveDateTime>,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct CreateActuacionRequest {
    pub expediente_id: i32,
    pub fecha_actuacion: NaiveDateTime,
    pub tipo_actuacion: String,
    pub descripcion: String,
    pub resultado: Option<String>,
    pub responsable: Option<String>,
    pub observaciones: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct UpdateActuacionRequest {
    pub fecha_actuacion: Option<NaiveDateTime>,
    pub tipo_actuacion: Option<String>,
    pub descripcion: Option<String>,
    pub resultado: Option<String>,
    pub responsable: Option<String>,
    pub observaciones: Option<String>,
}

/// Rango de fechas de consulta, ambos extremos incluidos.
#[derive(Debug, Deserialize)]
pub struct RangoFechasQuery {
    pub fecha_inicio: NaiveDateTime,
    pub fecha_fin: NaiveDateTime,
}
