use actix_web::{http::header, web, HttpResponse, Responder};

use crate::db::AppState;
use crate::documento::models::DocumentoDto;
use crate::reportes::{service, ReportError, ReportKind};
use crate::ErrorResponse;

fn respuesta_error(contexto: &str, error: ReportError) -> HttpResponse {
    match &error {
        ReportError::InvalidArgument(mensaje) => {
            HttpResponse::BadRequest().json(ErrorResponse::bad_request(mensaje))
        }
        ReportError::DocumentoNotFound(_) => {
            HttpResponse::NotFound().json(ErrorResponse::not_found("Documento no encontrado"))
        }
        ReportError::FileMissing(_) => HttpResponse::NotFound().json(ErrorResponse::not_found(
            "El archivo del reporte no existe en el servidor",
        )),
        ReportError::Db(_) | ReportError::Storage(_) | ReportError::Pdf(_) => {
            log::error!("{contexto}: {error}");
            HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("Error al generar el informe"))
        }
    }
}

async fn generar(state: web::Data<AppState>, kind: ReportKind) -> HttpResponse {
    match service::generar(&state, kind).await {
        Ok(documento) => HttpResponse::Ok().json(documento),
        Err(e) => respuesta_error(kind.tipo_documento(), e),
    }
}

#[utoipa::path(
    get,
    path = "/api/reportes/clientes",
    tag = "Reportes",
    responses(
        (status = 200, description = "Informe generado y registrado", body = DocumentoDto),
        (status = 500, description = "Error al generar", body = ErrorResponse)
    )
)]
pub async fn generar_informe_clientes(state: web::Data<AppState>) -> impl Responder {
    generar(state, ReportKind::Clientes).await
}

#[utoipa::path(
    get,
    path = "/api/reportes/expedientes-por-estado",
    tag = "Reportes",
    responses(
        (status = 200, description = "Informe generado y registrado", body = DocumentoDto),
        (status = 500, description = "Error al generar", body = ErrorResponse)
    )
)]
pub async fn generar_informe_expedientes_por_estado(state: web::Data<AppState>) -> impl Responder {
    generar(state, ReportKind::ExpedientesPorEstado).await
}

#[utoipa::path(
    get,
    path = "/api/reportes/actuaciones-por-expediente",
    tag = "Reportes",
    responses(
        (status = 200, description = "Informe generado y registrado", body = DocumentoDto),
        (status = 500, description = "Error al generar", body = ErrorResponse)
    )
)]
pub async fn generar_informe_actuaciones_por_expediente(
    state: web::Data<AppState>,
) -> impl Responder {
    generar(state, ReportKind::ActuacionesPorExpediente).await
}

#[utoipa::path(
    get,
    path = "/api/reportes/descargar/{documento_id}",
    tag = "Reportes",
    params(("documento_id" = i32, Path, description = "Id del Documento del reporte")),
    responses(
        (status = 200, description = "Bytes del PDF", content_type = "application/pdf"),
        (status = 404, description = "Documento o archivo no encontrado", body = ErrorResponse)
    )
)]
pub async fn descargar_reporte(path: web::Path<i32>, state: web::Data<AppState>) -> impl Responder {
    let documento_id = path.into_inner();
    match service::descargar(&state, documento_id).await {
        Ok(descarga) => HttpResponse::Ok()
            .content_type("application/pdf")
            .insert_header((
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", descarga.nombre_archivo),
            ))
            .body(descarga.bytes),
        Err(e) => respuesta_error("descarga de reporte", e),
    }
}
