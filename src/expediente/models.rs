use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Ciclo de vida de un expediente, en orden: Abierto -> EnTramite ->
/// Suspendido -> Archivado -> Cerrado. El orden de los variantes define el
/// orden de agrupación en los reportes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[repr(i32)]
#[serde(into = "i32", try_from = "i32")]
pub enum Estado {
    Abierto = 1,
    EnTramite = 2,
    Suspendido = 3,
    Archivado = 4,
    Cerrado = 5,
}

impl Estado {
    /// Los cinco estados en orden de ciclo de vida.
    pub const TODOS: [Estado; 5] = [
        Estado::Abierto,
        Estado::EnTramite,
        Estado::Suspendido,
        Estado::Archivado,
        Estado::Cerrado,
    ];
}

impl From<Estado> for i32 {
    fn from(estado: Estado) -> i32 {
        estado as i32
    }
}

impl TryFrom<i32> for Estado {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Estado::Abierto),
            2 => Ok(Estado::EnTramite),
            3 => Ok(Estado::Suspendido),
            4 => Ok(Estado::Archivado),
            5 => Ok(Estado::Cerrado),
            otro => Err(format!("estado desconocido: {otro}")),
        }
    }
}

/// Expediente jurídico gestionado por el despacho para un cliente.
#[derive(Debug, Serialize, Deserialize, Clone, sqlx::FromRow, ToSchema)]
pub struct Expediente {
    pub id: i32,
    #[schema(example = "EXP-2024-001")]
    pub numero_expediente: String,
    #[schema(example = "Reclamación de cantidad")]
    pub asunto: String,
    pub descripcion: Option<String>,
    #[schema(example = "Civil")]
    pub tipo_expediente: String,
    pub estado: Estado,
    pub cliente_id: i32,
    pub juzgado_tribunal: Option<String>,
    pub numero_procedimiento: Option<String>,
    pub fecha_apertura: NaiveDateTime,
    pub fecha_cierre: Option<NaiveDateTime>,
    pub fecha_modificacion: Option<NaiveDateTime>,
    pub observaciones: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct CreateExpedienteRequest {
    pub numero_expediente: String,
    pub asunto: String,
    pub descripcion: Option<String>,
    pub tipo_expediente: String,
    pub estado: Option<Estado>,
    pub cliente_id: i32,
    pub juzgado_tribunal: Option<String>,
    pub numero_procedimiento: Option<String>,
    pub observaciones: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct UpdateExpedienteRequest {
    pub numero_expediente: Option<String>,
    pub asunto: Option<String>,
    pub descripcion: Option<String>,
    pub tipo_expediente: Option<String>,
    pub estado: Option<Estado>,
    pub juzgado_tribunal: Option<String>,
    pub numero_procedimiento: Option<String>,
    pub observaciones: Option<String>,
}

/// Vista reducida de un expediente para listados rápidos, con el nombre
/// completo del cliente ya resuelto.
#[derive(Debug, Serialize, Deserialize, Clone, sqlx::FromRow, ToSchema)]
pub struct ExpedienteResumen {
    pub id: i32,
    pub numero_expediente: String,
    pub asunto: String,
    pub tipo_expediente: String,
    pub estado: Estado,
    #[schema(example = "María García López")]
    pub cliente_nombre: String,
    pub fecha_apertura: NaiveDateTime,
}

/// Término de búsqueda libre. Ausente o en blanco equivale a listar todo.
#[derive(Debug, Deserialize)]
pub struct BuscarQuery {
    pub q: Option<String>,
}
