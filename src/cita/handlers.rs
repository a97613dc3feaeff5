use actix_web::{web, HttpResponse, Responder};
use chrono::Local;

use crate::cita::models::{Cita, CreateCitaRequest, RangoFechasQuery, UpdateCitaRequest};
use crate::db::AppState;
use crate::ErrorResponse;

#[utoipa::path(
    get,
    path = "/api/citas",
    tag = "Citas",
    responses(
        (status = 200, description = "Listado de citas", body = [Cita])
    )
)]
pub async fn get_all_citas(state: web::Data<AppState>) -> impl Responder {
    match state.get_all_citas().await {
        Ok(citas) => HttpResponse::Ok().json(citas),
        Err(e) => {
            log::error!("Error al listar citas: {e}");
            HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("Error al obtener las citas"))
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/citas/{id}",
    tag = "Citas",
    params(("id" = i32, Path, description = "Id de la cita")),
    responses(
        (status = 200, description = "Cita encontrada", body = Cita),
        (status = 404, description = "Cita no encontrada", body = ErrorResponse)
    )
)]
pub async fn get_cita_by_id(path: web::Path<i32>, state: web::Data<AppState>) -> impl Responder {
    let id = path.into_inner();
    match state.get_cita_by_id(id).await {
        Ok(Some(cita)) => HttpResponse::Ok().json(cita),
        Ok(None) => HttpResponse::NotFound().json(ErrorResponse::not_found("Cita no encontrada")),
        Err(e) => {
            log::error!("Error al obtener cita {id}: {e}");
            HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("Error al obtener la cita"))
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/citas/expediente/{expediente_id}",
    tag = "Citas",
    params(("expediente_id" = i32, Path, description = "Id del expediente")),
    responses(
        (status = 200, description = "Citas del expediente", body = [Cita])
    )
)]
pub async fn get_citas_by_expediente(
    path: web::Path<i32>,
    state: web::Data<AppState>,
) -> impl Responder {
    let expediente_id = path.into_inner();
    match state.get_citas_by_expediente(expediente_id).await {
        Ok(citas) => HttpResponse::Ok().json(citas),
        Err(e) => {
            log::error!("Error al listar citas del expediente {expediente_id}: {e}");
            HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("Error al obtener las citas"))
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/citas/rango-fechas",
    tag = "Citas",
    params(
        ("fecha_inicio" = String, Query, description = "Inicio del rango (ISO 8601, incluido)"),
        ("fecha_fin" = String, Query, description = "Fin del rango (ISO 8601, incluido)")
    ),
    responses(
        (status = 200, description = "Citas dentro del rango", body = [Cita])
    )
)]
pub async fn get_citas_by_rango_fechas(
    query: web::Query<RangoFechasQuery>,
    state: web::Data<AppState>,
) -> impl Responder {
    let rango = query.into_inner();
    match state
        .get_citas_by_rango_fechas(rango.fecha_inicio, rango.fecha_fin)
        .await
    {
        Ok(citas) => HttpResponse::Ok().json(citas),
        Err(e) => {
            log::error!("Error al listar citas por rango de fechas: {e}");
            HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("Error al obtener las citas"))
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/citas/pendientes",
    tag = "Citas",
    responses(
        (status = 200, description = "Citas no completadas y futuras", body = [Cita])
    )
)]
pub async fn get_citas_pendientes(state: web::Data<AppState>) -> impl Responder {
    match state.get_citas_pendientes(Local::now().naive_local()).await {
        Ok(citas) => HttpResponse::Ok().json(citas),
        Err(e) => {
            log::error!("Error al listar citas pendientes: {e}");
            HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("Error al obtener las citas"))
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/citas",
    tag = "Citas",
    request_body = CreateCitaRequest,
    responses(
        (status = 201, description = "Cita creada", body = Cita),
        (status = 500, description = "Error al crear", body = ErrorResponse)
    )
)]
pub async fn create_cita(
    req: web::Json<CreateCitaRequest>,
    state: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let cita = Cita {
        id: 0,
        expediente_id: req.expediente_id,
        titulo: req.titulo,
        descripcion: req.descripcion,
        fecha_inicio: req.fecha_inicio,
        fecha_fin: req.fecha_fin,
        lugar: req.lugar,
        tipo_cita: req.tipo_cita,
        participantes: req.participantes,
        completada: false,
        observaciones: req.observaciones,
        fecha_creacion: Local::now().naive_local(),
        fecha_modificacion: None,
    };

    match state.insert_cita(&cita).await {
        Ok(creada) => HttpResponse::Created().json(creada),
        Err(e) => {
            log::error!("Error al crear cita: {e}");
            HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("Error al crear la cita"))
        }
    }
}

#[utoipa::path(
    put,
    path = "/api/citas/{id}",
    tag = "Citas",
    params(("id" = i32, Path, description = "Id de la cita")),
    request_body = UpdateCitaRequest,
    responses(
        (status = 200, description = "Cita actualizada", body = Cita),
        (status = 404, description = "Cita no encontrada", body = ErrorResponse)
    )
)]
pub async fn update_cita(
    path: web::Path<i32>,
    req: web::Json<UpdateCitaRequest>,
    state: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();
    let mut cita = match state.get_cita_by_id(id).await {
        Ok(Some(cita)) => cita,
        Ok(None) => {
            return HttpResponse::NotFound().json(ErrorResponse::not_found("Cita no encontrada"))
        }
        Err(e) => {
            log::error!("Error al obtener cita {id}: {e}");
            return HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("Error al obtener la cita"));
        }
    };

    let req = req.into_inner();
    if let Some(titulo) = req.titulo {
        cita.titulo = titulo;
    }
    if req.descripcion.is_some() {
        cita.descripcion = req.descripcion;
    }
    if let Some(fecha_inicio) = req.fecha_inicio {
        cita.fecha_inicio = fecha_inicio;
    }
    if let Some(fecha_fin) = req.fecha_fin {
        cita.fecha_fin = fecha_fin;
    }
    if req.lugar.is_some() {
        cita.lugar = req.lugar;
    }
    if let Some(tipo_cita) = req.tipo_cita {
        cita.tipo_cita = tipo_cita;
    }
    if req.participantes.is_some() {
        cita.participantes = req.participantes;
    }
    if let Some(completada) = req.completada {
        cita.completada = completada;
    }
    if req.observaciones.is_some() {
        cita.observaciones = req.observaciones;
    }
    cita.fecha_modificacion = Some(Local::now().naive_local());

    match state.update_cita(&cita).await {
        Ok(()) => HttpResponse::Ok().json(cita),
        Err(e) => {
            log::error!("Error al actualizar cita {id}: {e}");
            HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("Error al actualizar la cita"))
        }
    }
}

#[utoipa::path(
    delete,
    path = "/api/citas/{id}",
    tag = "Citas",
    params(("id" = i32, Path, description = "Id de la cita")),
    responses(
        (status = 204, description = "Cita eliminada"),
        (status = 404, description = "Cita no encontrada", body = ErrorResponse)
    )
)]
pub async fn delete_cita(path: web::Path<i32>, state: web::Data<AppState>) -> impl Responder {
    let id = path.into_inner();
    match state.delete_cita(id).await {
        Ok(true) => HttpResponse::NoContent().finish(),
        Ok(false) => HttpResponse::NotFound().json(ErrorResponse::not_found("Cita no encontrada")),
        Err(e) => {
            log::error!("Error al eliminar cita {id}: {e}");
            HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("Error al eliminar la cita"))
        }
    }
}
