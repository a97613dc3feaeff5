use actix_web::{web, HttpResponse, Responder};
use chrono::Local;

use crate::db::AppState;
use crate::documento::models::{
    CreateDocumentoRequest, DocumentoDto, UpdateDocumentoRequest,
};
use crate::ErrorResponse;

#[utoipa::path(
    get,
    path = "/api/documentos",
    tag = "Documentos",
    responses(
        (status = 200, description = "Listado de documentos", body = [DocumentoDto])
    )
)]
pub async fn get_all_documentos(state: web::Data<AppState>) -> impl Responder {
    match state.get_all_documentos().await {
        Ok(documentos) => {
            let dtos: Vec<DocumentoDto> = documentos.into_iter().map(Into::into).collect();
            HttpResponse::Ok().json(dtos)
        }
        Err(e) => {
            log::error!("Error al listar documentos: {e}");
            HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("Error al obtener los documentos"))
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/documentos/{id}",
    tag = "Documentos",
    params(("id" = i32, Path, description = "Id del documento")),
    responses(
        (status = 200, description = "Documento encontrado", body = DocumentoDto),
        (status = 404, description = "Documento no encontrado", body = ErrorResponse)
    )
)]
pub async fn get_documento_by_id(
    path: web::Path<i32>,
    state: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();
    match state.get_documento_by_id(id).await {
        Ok(Some(documento)) => HttpResponse::Ok().json(DocumentoDto::from(documento)),
        Ok(None) => {
            HttpResponse::NotFound().json(ErrorResponse::not_found("Documento no encontrado"))
        }
        Err(e) => {
            log::error!("Error al obtener documento {id}: {e}");
            HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("Error al obtener el documento"))
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/documentos/expediente/{expediente_id}",
    tag = "Documentos",
    params(("expediente_id" = i32, Path, description = "Id del expediente")),
    responses(
        (status = 200, description = "Documentos del expediente", body = [DocumentoDto])
    )
)]
pub async fn get_documentos_by_expediente(
    path: web::Path<i32>,
    state: web::Data<AppState>,
) -> impl Responder {
    let expediente_id = path.into_inner();
    match state.get_documentos_by_expediente(expediente_id).await {
        Ok(documentos) => {
            let dtos: Vec<DocumentoDto> = documentos.into_iter().map(Into::into).collect();
            HttpResponse::Ok().json(dtos)
        }
        Err(e) => {
            log::error!("Error al listar documentos del expediente {expediente_id}: {e}");
            HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("Error al obtener los documentos"))
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/documentos/tipo/{tipo}",
    tag = "Documentos",
    params(("tipo" = String, Path, description = "Tipo de documento, sin distinguir mayúsculas")),
    responses(
        (status = 200, description = "Documentos del tipo indicado", body = [DocumentoDto])
    )
)]
pub async fn get_documentos_by_tipo(
    path: web::Path<String>,
    state: web::Data<AppState>,
) -> impl Responder {
    let tipo = path.into_inner();
    match state.get_documentos_by_tipo(&tipo).await {
        Ok(documentos) => {
            let dtos: Vec<DocumentoDto> = documentos.into_iter().map(Into::into).collect();
            HttpResponse::Ok().json(dtos)
        }
        Err(e) => {
            log::error!("Error al listar documentos del tipo {tipo}: {e}");
            HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("Error al obtener los documentos"))
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/documentos",
    tag = "Documentos",
    request_body = CreateDocumentoRequest,
    responses(
        (status = 201, description = "Documento registrado", body = DocumentoDto),
        (status = 500, description = "Error al registrar", body = ErrorResponse)
    )
)]
pub async fn create_documento(
    req: web::Json<CreateDocumentoRequest>,
    state: web::Data<AppState>,
) -> impl Responder {
    match state.insert_documento(&req.into_inner()).await {
        Ok(creado) => HttpResponse::Created().json(DocumentoDto::from(creado)),
        Err(e) => {
            log::error!("Error al registrar documento: {e}");
            HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("Error al registrar el documento"))
        }
    }
}

#[utoipa::path(
    put,
    path = "/api/documentos/{id}",
    tag = "Documentos",
    params(("id" = i32, Path, description = "Id del documento")),
    request_body = UpdateDocumentoRequest,
    responses(
        (status = 200, description = "Documento actualizado", body = DocumentoDto),
        (status = 404, description = "Documento no encontrado", body = ErrorResponse)
    )
)]
pub async fn update_documento(
    path: web::Path<i32>,
    req: web::Json<UpdateDocumentoRequest>,
    state: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();
    let mut documento = match state.get_documento_by_id(id).await {
        Ok(Some(documento)) => documento,
        Ok(None) => {
            return HttpResponse::NotFound()
                .json(ErrorResponse::not_found("Documento no encontrado"))
        }
        Err(e) => {
            log::error!("Error al obtener documento {id}: {e}");
            return HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("Error al obtener el documento"));
        }
    };

    let req = req.into_inner();
    if let Some(nombre_archivo) = req.nombre_archivo {
        documento.nombre_archivo = nombre_archivo;
    }
    if req.descripcion.is_some() {
        documento.descripcion = req.descripcion;
    }
    if let Some(tipo_documento) = req.tipo_documento {
        documento.tipo_documento = tipo_documento;
    }
    if req.observaciones.is_some() {
        documento.observaciones = req.observaciones;
    }
    documento.fecha_modificacion = Some(Local::now().naive_local());

    match state.update_documento(&documento).await {
        Ok(()) => HttpResponse::Ok().json(DocumentoDto::from(documento)),
        Err(e) => {
            log::error!("Error al actualizar documento {id}: {e}");
            HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("Error al actualizar el documento"))
        }
    }
}

#[utoipa::path(
    delete,
    path = "/api/documentos/{id}",
    tag = "Documentos",
    params(("id" = i32, Path, description = "Id del documento")),
    responses(
        (status = 204, description = "Documento eliminado"),
        (status = 404, description = "Documento no encontrado", body = ErrorResponse)
    )
)]
pub async fn delete_documento(path: web::Path<i32>, state: web::Data<AppState>) -> impl Responder {
    let id = path.into_inner();
    match state.delete_documento(id).await {
        Ok(true) => HttpResponse::NoContent().finish(),
        Ok(false) => {
            HttpResponse::NotFound().json(ErrorResponse::not_found("Documento no encontrado"))
        }
        Err(e) => {
            log::error!("Error al eliminar documento {id}: {e}");
            HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("Error al eliminar el documento"))
        }
    }
}
