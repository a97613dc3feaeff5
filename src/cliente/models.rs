use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Cliente del despacho, persona física o jurídica.
#[derive(Debug, Serialize, Deserialize, Clone, sqlx::FromRow, ToSchema)]
pub struct Cliente {
    pub id: i32,
    #[schema(example = "María")]
    pub nombre: String,
    #[schema(example = "García López")]
    pub apellidos: String,
    #[schema(example = "12345678Z")]
    pub dni_cif: String,
    pub telefono: Option<String>,
    pub email: Option<String>,
    pub direccion: Option<String>,
    pub ciudad: Option<String>,
    pub codigo_postal: Option<String>,
    pub observaciones: Option<String>,
    pub fecha_alta: NaiveDateTime,
    pub fecha_modificacion: Option<NaiveDateTime>,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct CreateClienteRequest {
    pub nombre: String,
    pub apellidos: String,
    pub dni_cif: String,
    pub telefono: Option<String>,
    pub email: Option<String>,
    pub direccion: Option<String>,
    pub ciudad: Option<String>,
    pub codigo_postal: Option<String>,
    pub observaciones: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct UpdateClienteRequest {
    pub nombre: Option<String>,
    pub apellidos: Option<String>,
    pub dni_cif: Option<String>,
    pub telefono: Option<String>,
    pub email: Option<String>,
    pub direccion: Option<String>,
    pub ciudad: Option<String>,
    pub codigo_postal: Option<String>,
    pub observaciones: Option<String>,
}

/// Término de búsqueda libre. Ausente o en blanco equivale a listar todo.
#[derive(Debug, Deserialize)]
pub struct BuscarQuery {
    pub q: Option<String>,
}
