use actix_web::{web, HttpResponse, Responder};
use chrono::Local;

use crate::db::AppState;
use crate::expediente::models::{
    BuscarQuery, CreateExpedienteRequest, Estado, Expediente, ExpedienteResumen,
    UpdateExpedienteRequest,
};
use crate::ErrorResponse;

#[utoipa::path(
    get,
    path = "/api/expedientes",
    tag = "Expedientes",
    responses(
        (status = 200, description = "Listado de expedientes", body = [Expediente])
    )
)]
pub async fn get_all_expedientes(state: web::Data<AppState>) -> impl Responder {
    match state.get_all_expedientes().await {
        Ok(expedientes) => HttpResponse::Ok().json(expedientes),
        Err(e) => {
            log::error!("Error al listar expedientes: {e}");
            HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("Error al obtener los expedientes"))
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/expedientes/{id}",
    tag = "Expedientes",
    params(("id" = i32, Path, description = "Id del expediente")),
    responses(
        (status = 200, description = "Expediente encontrado", body = Expediente),
        (status = 404, description = "Expediente no encontrado", body = ErrorResponse)
    )
)]
pub async fn get_expediente_by_id(
    path: web::Path<i32>,
    state: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();
    match state.get_expediente_by_id(id).await {
        Ok(Some(expediente)) => HttpResponse::Ok().json(expediente),
        Ok(None) => {
            HttpResponse::NotFound().json(ErrorResponse::not_found("Expediente no encontrado"))
        }
        Err(e) => {
            log::error!("Error al obtener expediente {id}: {e}");
            HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("Error al obtener el expediente"))
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/expedientes/cliente/{cliente_id}",
    tag = "Expedientes",
    params(("cliente_id" = i32, Path, description = "Id del cliente")),
    responses(
        (status = 200, description = "Expedientes del cliente", body = [Expediente])
    )
)]
pub async fn get_expedientes_by_cliente(
    path: web::Path<i32>,
    state: web::Data<AppState>,
) -> impl Responder {
    let cliente_id = path.into_inner();
    match state.get_expedientes_by_cliente(cliente_id).await {
        Ok(expedientes) => HttpResponse::Ok().json(expedientes),
        Err(e) => {
            log::error!("Error al listar expedientes del cliente {cliente_id}: {e}");
            HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("Error al obtener los expedientes"))
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/expedientes/estado/{estado}",
    tag = "Expedientes",
    params(("estado" = i32, Path, description = "Estado (1=Abierto .. 5=Cerrado)")),
    responses(
        (status = 200, description = "Expedientes en el estado", body = [Expediente]),
        (status = 400, description = "Estado desconocido", body = ErrorResponse)
    )
)]
pub async fn get_expedientes_by_estado(
    path: web::Path<i32>,
    state: web::Data<AppState>,
) -> impl Responder {
    let Ok(estado) = Estado::try_from(path.into_inner()) else {
        return HttpResponse::BadRequest().json(ErrorResponse::bad_request("Estado desconocido"));
    };
    match state.get_expedientes_by_estado(estado).await {
        Ok(expedientes) => HttpResponse::Ok().json(expedientes),
        Err(e) => {
            log::error!("Error al listar expedientes por estado: {e}");
            HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("Error al obtener los expedientes"))
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/expedientes/buscar",
    tag = "Expedientes",
    params(("q" = Option<String>, Query, description = "Término a buscar en número, asunto, tipo o número de procedimiento")),
    responses(
        (status = 200, description = "Expedientes que coinciden con la búsqueda", body = [Expediente])
    )
)]
pub async fn search_expedientes(
    query: web::Query<BuscarQuery>,
    state: web::Data<AppState>,
) -> impl Responder {
    let q = query.q.as_deref().unwrap_or("");
    match state.search_expedientes(q).await {
        Ok(expedientes) => HttpResponse::Ok().json(expedientes),
        Err(e) => {
            log::error!("Error al buscar expedientes con término {q:?}: {e}");
            HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("Error al buscar los expedientes"))
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/expedientes/resumen",
    tag = "Expedientes",
    responses(
        (status = 200, description = "Resumen de todos los expedientes", body = [ExpedienteResumen])
    )
)]
pub async fn get_expedientes_resumen(state: web::Data<AppState>) -> impl Responder {
    match state.get_expedientes_resumen().await {
        Ok(resumen) => HttpResponse::Ok().json(resumen),
        Err(e) => {
            log::error!("Error al obtener el resumen de expedientes: {e}");
            HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("Error al obtener el resumen"))
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/expedientes",
    tag = "Expedientes",
    request_body = CreateExpedienteRequest,
    responses(
        (status = 201, description = "Expediente creado", body = Expediente),
        (status = 500, description = "Error al crear", body = ErrorResponse)
    )
)]
pub async fn create_expediente(
    req: web::Json<CreateExpedienteRequest>,
    state: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let expediente = Expediente {
        id: 0,
        numero_expediente: req.numero_expediente,
        asunto: req.asunto,
        descripcion: req.descripcion,
        tipo_expediente: req.tipo_expediente,
        estado: req.estado.unwrap_or(Estado::Abierto),
        cliente_id: req.cliente_id,
        juzgado_tribunal: req.juzgado_tribunal,
        numero_procedimiento: req.numero_procedimiento,
        fecha_apertura: Local::now().naive_local(),
        fecha_cierre: None,
        fecha_modificacion: None,
        observaciones: req.observaciones,
    };

    match state.insert_expediente(&expediente).await {
        Ok(creado) => HttpResponse::Created().json(creado),
        Err(e) => {
            log::error!("Error al crear expediente: {e}");
            HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("Error al crear el expediente"))
        }
    }
}

#[utoipa::path(
    put,
    path = "/api/expedientes/{id}",
    tag = "Expedientes",
    params(("id" = i32, Path, description = "Id del expediente")),
    request_body = UpdateExpedienteRequest,
    responses(
        (status = 200, description = "Expediente actualizado", body = Expediente),
        (status = 404, description = "Expediente no encontrado", body = ErrorResponse)
    )
)]
pub async fn update_expediente(
    path: web::Path<i32>,
    req: web::Json<UpdateExpedienteRequest>,
    state: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();
    let mut expediente = match state.get_expediente_by_id(id).await {
        Ok(Some(expediente)) => expediente,
        Ok(None) => {
            return HttpResponse::NotFound()
                .json(ErrorResponse::not_found("Expediente no encontrado"))
        }
        Err(e) => {
            log::error!("Error al obtener expediente {id}: {e}");
            return HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("Error al obtener el expediente"));
        }
    };

    let req = req.into_inner();
    if let Some(numero_expediente) = req.numero_expediente {
        expediente.numero_expediente = numero_expediente;
    }
    if let Some(asunto) = req.asunto {
        expediente.asunto = asunto;
    }
    if req.descripcion.is_some() {
        expediente.descripcion = req.descripcion;
    }
    if let Some(tipo_expediente) = req.tipo_expediente {
        expediente.tipo_expediente = tipo_expediente;
    }
    if let Some(estado) = req.estado {
        expediente.estado = estado;
        // Cerrar o archivar estampa la fecha de cierre una sola vez.
        if matches!(estado, Estado::Cerrado | Estado::Archivado)
            && expediente.fecha_cierre.is_none()
        {
            expediente.fecha_cierre = Some(Local::now().naive_local());
        }
    }
    if req.juzgado_tribunal.is_some() {
        expediente.juzgado_tribunal = req.juzgado_tribunal;
    }
    if req.numero_procedimiento.is_some() {
        expediente.numero_procedimiento = req.numero_procedimiento;
    }
    if req.observaciones.is_some() {
        expediente.observaciones = req.observaciones;
    }
    expediente.fecha_modificacion = Some(Local::now().naive_local());

    match state.update_expediente(&expediente).await {
        Ok(()) => HttpResponse::Ok().json(expediente),
        Err(e) => {
            log::error!("Error al actualizar expediente {id}: {e}");
            HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("Error al actualizar el expediente"))
        }
    }
}

#[utoipa::path(
    delete,
    path = "/api/expedientes/{id}",
    tag = "Expedientes",
    params(("id" = i32, Path, description = "Id del expediente")),
    responses(
        (status = 204, description = "Expediente eliminado"),
        (status = 404, description = "Expediente no encontrado", body = ErrorResponse)
    )
)]
pub async fn delete_expediente(path: web::Path<i32>, state: web::Data<AppState>) -> impl Responder {
    let id = path.into_inner();
    match state.delete_expediente(id).await {
        Ok(true) => HttpResponse::NoContent().finish(),
        Ok(false) => {
            HttpResponse::NotFound().json(ErrorResponse::not_found("Expediente no encontrado"))
        }
        Err(e) => {
            log::error!("Error al eliminar expediente {id}: {e}");
            HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("Error al eliminar el expediente"))
        }
    }
}
