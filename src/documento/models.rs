use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::reportes::format::format_bytes;

/// Documento registrado en el sistema. `expediente_id` es nulo cuando el
/// documento es un artefacto generado por el propio sistema (un reporte)
/// y no pertenece a ningún expediente.
#[derive(Debug, Serialize, Deserialize, Clone, sqlx::FromRow, ToSchema)]
pub struct Documento {
    pub id: i32,
    pub expediente_id: Option<i32>,
    #[schema(example = "contrato.pdf")]
    pub nombre_archivo: String,
    pub descripcion: Option<String>,
    #[schema(example = "Contrato")]
    pub tipo_documento: String,
    pub ruta_archivo: String,
    pub tamano_bytes: i64,
    #[schema(example = ".pdf")]
    pub extension: Option<String>,
    pub fecha_carga: NaiveDateTime,
    pub cargado_por: Option<String>,
    pub fecha_modificacion: Option<NaiveDateTime>,
    pub observaciones: Option<String>,
}

/// Representación de un documento hacia el exterior, con el tamaño ya
/// formateado para mostrar.
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct DocumentoDto {
    pub id: i32,
    pub expediente_id: Option<i32>,
    pub nombre_archivo: String,
    pub descripcion: Option<String>,
    pub tipo_documento: String,
    pub ruta_archivo: String,
    pub tamano_bytes: i64,
    #[schema(example = "1.5 MB")]
    pub tamano_formateado: String,
    pub extension: Option<String>,
    pub fecha_carga: NaiveDateTime,
    pub cargado_por: Option<String>,
    pub fecha_modificacion: Option<NaiveDateTime>,
    pub observaciones: Option<String>,
}

impl From<Documento> for DocumentoDto {
    fn from(d: Documento) -> Self {
        let tamano_formateado =
            format_bytes(d.tamano_bytes).unwrap_or_else(|_| String::from("-"));
        DocumentoDto {
            id: d.id,
            expediente_id: d.expediente_id,
            nombre_archivo: d.nombre_archivo,
            descripcion: d.descripcion,
            tipo_documento: d.tipo_documento,
            ruta_archivo: d.ruta_archivo,
            tamano_bytes: d.tamano_bytes,
            tamano_formateado,
            extension: d.extension,
            fecha_carga: d.fecha_carga,
            cargado_por: d.cargado_por,
            fecha_modificacion: d.fecha_modificacion,
            observaciones: d.observaciones,
        }
    }
}

/// Alta de un registro de documento. La ruta apunta a un archivo ya presente
/// en el almacenamiento; este servicio no recibe el binario.
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct CreateDocumentoRequest {
    pub expediente_id: Option<i32>,
    pub nombre_archivo: String,
    pub descripcion: Option<String>,
    pub tipo_documento: String,
    pub ruta_archivo: String,
    pub tamano_bytes: i64,
    pub extension: Option<String>,
    pub cargado_por: Option<String>,
    pub observaciones: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct UpdateDocumentoRequest {
    pub nombre_archivo: Option<String>,
    pub descripcion: Option<String>,
    pub tipo_documento: Option<String>,
    pub observaciones: Option<String>,
}
