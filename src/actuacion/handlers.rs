use actix_web::{web, HttpResponse, Responder};
use chrono::Local;

use crate::actuacion::models::{
    Actuacion, CreateActuacionRequest, RangoFechasQuery, UpdateActuacionRequest,
};
use crate::db::AppState;
use crate::ErrorResponse;

#[utoipa::path(
    get,
    path = "/api/actuaciones",
    tag = "Actuaciones",
    responses(
        (status = 200, description = "Listado de actuaciones", body = [Actuacion])
    )
)]
pub async fn get_all_actuaciones(state: web::Data<AppState>) -> impl Responder {
    match state.get_all_actuaciones().await {
        Ok(actuaciones) => HttpResponse::Ok().json(actuaciones),
        Err(e) => {
            log::error!("Error al listar actuaciones: {e}");
            HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("Error al obtener las actuaciones"))
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/actuaciones/{id}",
    tag = "Actuaciones",
    params(("id" = i32, Path, description = "Id de la actuación")),
    responses(
        (status = 200, description = "Actuación encontrada", body = Actuacion),
        (status = 404, description = "Actuación no encontrada", body = ErrorResponse)
    )
)]
pub async fn get_actuacion_by_id(
    path: web::Path<i32>,
    state: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();
    match state.get_actuacion_by_id(id).await {
        Ok(Some(actuacion)) => HttpResponse::Ok().json(actuacion),
        Ok(None) => {
            HttpResponse::NotFound().json(ErrorResponse::not_found("Actuación no encontrada"))
        }
        Err(e) => {
            log::error!("Error al obtener actuación {id}: {e}");
            HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("Error al obtener la actuación"))
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/actuaciones/expediente/{expediente_id}",
    tag = "Actuaciones",
    params(("expediente_id" = i32, Path, description = "Id del expediente")),
    responses(
        (status = 200, description = "Actuaciones del expediente", body = [Actuacion])
    )
)]
pub async fn get_actuaciones_by_expediente(
    path: web::Path<i32>,
    state: web::Data<AppState>,
) -> impl Responder {
    let expediente_id = path.into_inner();
    match state.get_actuaciones_by_expediente(expediente_id).await {
        Ok(actuaciones) => HttpResponse::Ok().json(actuaciones),
        Err(e) => {
            log::error!("Error al listar actuaciones del expediente {expediente_id}: {e}");
            HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("Error al obtener las actuaciones"))
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/actuaciones/rango-fechas",
    tag = "Actuaciones",
    params(
        ("fecha_inicio" = String, Query, description = "Inicio del rango (ISO 8601, incluido)"),
        ("fecha_fin" = String, Query, description = "Fin del rango (ISO 8601, incluido)")
    ),
    responses(
        (status = 200, description = "Actuaciones dentro del rango", body = [Actuacion])
    )
)]
pub async fn get_actuaciones_by_rango_fechas(
    query: web::Query<RangoFechasQuery>,
    state: web::Data<AppState>,
) -> impl Responder {
    let rango = query.into_inner();
    match state
        .get_actuaciones_by_rango_fechas(rango.fecha_inicio, rango.fecha_fin)
        .await
    {
        Ok(actuaciones) => HttpResponse::Ok().json(actuaciones),
        Err(e) => {
            log::error!("Error al listar actuaciones por rango de fechas: {e}");
            HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("Error al obtener las actuaciones"))
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/actuaciones",
    tag = "Actuaciones",
    request_body = CreateActuacionRequest,
    responses(
        (status = 201, description = "Actuación creada", body = Actuacion),
        (status = 500, description = "Error al crear", body = ErrorResponse)
    )
)]
pub async fn create_actuacion(
    req: web::Json<CreateActuacionRequest>,
    state: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let actuacion = Actuacion {
        id: 0,
        expediente_id: req.expediente_id,
        fecha_actuacion: req.fecha_actuacion,
        tipo_actuacion: req.tipo_actuacion,
        descripcion: req.descripcion,
        resultado: req.resultado,
        responsable: req.responsable,
        observaciones: req.observaciones,
        fecha_registro: Local::now().naive_local(),
        fecha_modificacion: None,
    };

    match state.insert_actuacion(&actuacion).await {
        Ok(creada) => HttpResponse::Created().json(creada),
        Err(e) => {
            log::error!("Error al crear actuación: {e}");
            HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("Error al crear la actuación"))
        }
    }
}

#[utoipa::path(
    put,
    path = "/api/actuaciones/{id}",
    tag = "Actuaciones",
    params(("id" = i32, Path, description = "Id de la actuación")),
    request_body = UpdateActuacionRequest,
    responses(
        (status = 200, description = "Actuación actualizada", body = Actuacion),
        (status = 404, description = "Actuación no encontrada", body = ErrorResponse)
    )
)]
pub async fn update_actuacion(
    path: web::Path<i32>,
    req: web::Json<UpdateActuacionRequest>,
    state: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();
    let mut actuacion = match state.get_actuacion_by_id(id).await {
        Ok(Some(actuacion)) => actuacion,
        Ok(None) => {
            return HttpResponse::NotFound()
                .json(ErrorResponse::not_found("Actuación no encontrada"))
        }
        Err(e) => {
            log::error!("Error al obtener actuación {id}: {e}");
            return HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("Error al obtener la actuación"));
        }
    };

    let req = req.into_inner();
    if let Some(fecha_actuacion) = req.fecha_actuacion {
        actuacion.fecha_actuacion = fecha_actuacion;
    }
    if let Some(tipo_actuacion) = req.tipo_actuacion {
        actuacion.tipo_actuacion = tipo_actuacion;
    }
    if let Some(descripcion) = req.descripcion {
        actuacion.descripcion = descripcion;
    }
    if req.resultado.is_some() {
        actuacion.resultado = req.resultado;
    }
    if req.responsable.is_some() {
        actuacion.responsable = req.responsable;
    }
    if req.observaciones.is_some() {
        actuacion.observaciones = req.observaciones;
    }
    actuacion.fecha_modificacion = Some(Local::now().naive_local());

    match state.update_actuacion(&actuacion).await {
        Ok(()) => HttpResponse::Ok().json(actuacion),
        Err(e) => {
            log::error!("Error al actualizar actuación {id}: {e}");
            HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("Error al actualizar la actuación"))
        }
    }
}

#[utoipa::path(
    delete,
    path = "/api/actuaciones/{id}",
    tag = "Actuaciones",
    params(("id" = i32, Path, description = "Id de la actuación")),
    responses(
        (status = 204, description = "Actuación eliminada"),
        (status = 404, description = "Actuación no encontrada", body = ErrorResponse)
    )
)]
pub async fn delete_actuacion(path: web::Path<i32>, state: web::Data<AppState>) -> impl Responder {
    let id = path.into_inner();
    match state.delete_actuacion(id).await {
        Ok(true) => HttpResponse::NoContent().finish(),
        Ok(false) => {
            HttpResponse::NotFound().json(ErrorResponse::not_found("Actuación no encontrada"))
        }
        Err(e) => {
            log::error!("Error al eliminar actuación {id}: {e}");
            HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("Error al eliminar la actuación"))
        }
    }
}
