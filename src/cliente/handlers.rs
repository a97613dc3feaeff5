use actix_web::{web, HttpResponse, Responder};
use chrono::Local;

use crate::cliente::models::{BuscarQuery, Cliente, CreateClienteRequest, UpdateClienteRequest};
use crate::db::AppState;
use crate::ErrorResponse;

#[utoipa::path(
    get,
    path = "/api/clientes",
    tag = "Clientes",
    responses(
        (status = 200, description = "Listado de clientes", body = [Cliente])
    )
)]
pub async fn get_all_clientes(state: web::Data<AppState>) -> impl Responder {
    match state.get_all_clientes().await {
        Ok(clientes) => HttpResponse::Ok().json(clientes),
        Err(e) => {
            log::error!("Error al listar clientes: {e}");
            HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("Error al obtener los clientes"))
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/clientes/{id}",
    tag = "Clientes",
    params(("id" = i32, Path, description = "Id del cliente")),
    responses(
        (status = 200, description = "Cliente encontrado", body = Cliente),
        (status = 404, description = "Cliente no encontrado", body = ErrorResponse)
    )
)]
pub async fn get_cliente_by_id(path: web::Path<i32>, state: web::Data<AppState>) -> impl Responder {
    let id = path.into_inner();
    match state.get_cliente_by_id(id).await {
        Ok(Some(cliente)) => HttpResponse::Ok().json(cliente),
        Ok(None) => HttpResponse::NotFound().json(ErrorResponse::not_found("Cliente no encontrado")),
        Err(e) => {
            log::error!("Error al obtener cliente {id}: {e}");
            HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("Error al obtener el cliente"))
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/clientes/buscar",
    tag = "Clientes",
    params(("q" = Option<String>, Query, description = "Término a buscar en nombre, apellidos, DNI/CIF o email")),
    responses(
        (status = 200, description = "Clientes que coinciden con la búsqueda", body = [Cliente])
    )
)]
pub async fn search_clientes(
    query: web::Query<BuscarQuery>,
    state: web::Data<AppState>,
) -> impl Responder {
    let q = query.q.as_deref().unwrap_or("");
    match state.search_clientes(q).await {
        Ok(clientes) => HttpResponse::Ok().json(clientes),
        Err(e) => {
            log::error!("Error al buscar clientes con término {q:?}: {e}");
            HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("Error al buscar los clientes"))
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/clientes",
    tag = "Clientes",
    request_body = CreateClienteRequest,
    responses(
        (status = 201, description = "Cliente creado", body = Cliente),
        (status = 500, description = "Error al crear", body = ErrorResponse)
    )
)]
pub async fn create_cliente(
    req: web::Json<CreateClienteRequest>,
    state: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let cliente = Cliente {
        id: 0,
        nombre: req.nombre,
        apellidos: req.apellidos,
        dni_cif: req.dni_cif,
        telefono: req.telefono,
        email: req.email,
        direccion: req.direccion,
        ciudad: req.ciudad,
        codigo_postal: req.codigo_postal,
        observaciones: req.observaciones,
        fecha_alta: Local::now().naive_local(),
        fecha_modificacion: None,
    };

    match state.insert_cliente(&cliente).await {
        Ok(creado) => HttpResponse::Created().json(creado),
        Err(e) => {
            log::error!("Error al crear cliente: {e}");
            HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("Error al crear el cliente"))
        }
    }
}

#[utoipa::path(
    put,
    path = "/api/clientes/{id}",
    tag = "Clientes",
    params(("id" = i32, Path, description = "Id del cliente")),
    request_body = UpdateClienteRequest,
    responses(
        (status = 200, description = "Cliente actualizado", body = Cliente),
        (status = 404, description = "Cliente no encontrado", body = ErrorResponse)
    )
)]
pub async fn update_cliente(
    path: web::Path<i32>,
    req: web::Json<UpdateClienteRequest>,
    state: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();
    let mut cliente = match state.get_cliente_by_id(id).await {
        Ok(Some(cliente)) => cliente,
        Ok(None) => {
            return HttpResponse::NotFound().json(ErrorResponse::not_found("Cliente no encontrado"))
        }
        Err(e) => {
            log::error!("Error al obtener cliente {id}: {e}");
            return HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("Error al obtener el cliente"));
        }
    };

    let req = req.into_inner();
    if let Some(nombre) = req.nombre {
        cliente.nombre = nombre;
    }
    if let Some(apellidos) = req.apellidos {
        cliente.apellidos = apellidos;
    }
    if let Some(dni_cif) = req.dni_cif {
        cliente.dni_cif = dni_cif;
    }
    if req.telefono.is_some() {
        cliente.telefono = req.telefono;
    }
    if req.email.is_some() {
        cliente.email = req.email;
    }
    if req.direccion.is_some() {
        cliente.direccion = req.direccion;
    }
    if req.ciudad.is_some() {
        cliente.ciudad = req.ciudad;
    }
    if req.codigo_postal.is_some() {
        cliente.codigo_postal = req.codigo_postal;
    }
    if req.observaciones.is_some() {
        cliente.observaciones = req.observaciones;
    }
    cliente.fecha_modificacion = Some(Local::now().naive_local());

    match state.update_cliente(&cliente).await {
        Ok(()) => HttpResponse::Ok().json(cliente),
        Err(e) => {
            log::error!("Error al actualizar cliente {id}: {e}");
            HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("Error al actualizar el cliente"))
        }
    }
}

#[utoipa::path(
    delete,
    path = "/api/clientes/{id}",
    tag = "Clientes",
    params(("id" = i32, Path, description = "Id del cliente")),
    responses(
        (status = 204, description = "Cliente eliminado"),
        (status = 404, description = "Cliente no encontrado", body = ErrorResponse)
    )
)]
pub async fn delete_cliente(path: web::Path<i32>, state: web::Data<AppState>) -> impl Responder {
    let id = path.into_inner();
    match state.delete_cliente(id).await {
        Ok(true) => HttpResponse::NoContent().finish(),
        Ok(false) => HttpResponse::NotFound().json(ErrorResponse::not_found("Cliente no encontrado")),
        Err(e) => {
            log::error!("Error al eliminar cliente {id}: {e}");
            HttpResponse::InternalServerError()
                .json(ErrorResponse::internal_error("Error al eliminar el cliente"))
        }
    }
}
