use actix_cors::Cors;
use actix_web::middleware::Compress;
use actix_web::{http::header, web, App, HttpServer};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

pub mod actuacion;
pub mod cita;
pub mod cliente;
pub mod db;
pub mod documento;
pub mod expediente;
pub mod reportes;

pub use crate::db::AppState;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub timestamp: String,
}

impl ErrorResponse {
    pub fn new(error_type: &str, message: &str) -> Self {
        Self {
            error: error_type.to_string(),
            message: message.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn not_found(message: &str) -> Self {
        Self::new("NotFound", message)
    }

    pub fn bad_request(message: &str) -> Self {
        Self::new("BadRequest", message)
    }

    pub fn internal_error(message: &str) -> Self {
        Self::new("InternalServerError", message)
    }
}

pub async fn run() -> std::io::Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    #[derive(OpenApi)]
    #[openapi(
        paths(
            crate::cliente::handlers::get_all_clientes,
            crate::cliente::handlers::get_cliente_by_id,
            crate::cliente::handlers::search_clientes,
            crate::cliente::handlers::create_cliente,
            crate::cliente::handlers::update_cliente,
            crate::cliente::handlers::delete_cliente,
            crate::expediente::handlers::get_all_expedientes,
            crate::expediente::handlers::get_expediente_by_id,
            crate::expediente::handlers::get_expedientes_by_cliente,
            crate::expediente::handlers::get_expedientes_by_estado,
            crate::expediente::handlers::search_expedientes,
            crate::expediente::handlers::get_expedientes_resumen,
            crate::expediente::handlers::create_expediente,
            crate::expediente::handlers::update_expediente,
            crate::expediente::handlers::delete_expediente,
            crate::actuacion::handlers::get_all_actuaciones,
            crate::actuacion::handlers::get_actuacion_by_id,
            crate::actuacion::handlers::get_actuaciones_by_expediente,
            crate::actuacion::handlers::get_actuaciones_by_rango_fechas,
            crate::actuacion::handlers::create_actuacion,
            crate::actuacion::handlers::update_actuacion,
            crate::actuacion::handlers::delete_actuacion,
            crate::cita::handlers::get_all_citas,
            crate::cita::handlers::get_cita_by_id,
            crate::cita::handlers::get_citas_by_expediente,
            crate::cita::handlers::get_citas_by_rango_fechas,
            crate::cita::handlers::get_citas_pendientes,
            crate::cita::handlers::create_cita,
            crate::cita::handlers::update_cita,
            crate::cita::handlers::delete_cita,
            crate::documento::handlers::get_all_documentos,
            crate::documento::handlers::get_documento_by_id,
            crate::documento::handlers::get_documentos_by_expediente,
            crate::documento::handlers::get_documentos_by_tipo,
            crate::documento::handlers::create_documento,
            crate::documento::handlers::update_documento,
            crate::documento::handlers::delete_documento,
            crate::reportes::handlers::generar_informe_clientes,
            crate::reportes::handlers::generar_informe_expedientes_por_estado,
            crate::reportes::handlers::generar_informe_actuaciones_por_expediente,
            crate::reportes::handlers::descargar_reporte
        ),
        components(
            schemas(
                cliente::models::Cliente,
                cliente::models::CreateClienteRequest,
                cliente::models::UpdateClienteRequest,
                expediente::models::Expediente,
                expediente::models::Estado,
                expediente::models::ExpedienteResumen,
                expediente::models::CreateExpedienteRequest,
                expediente::models::UpdateExpedienteRequest,
                actuacion::models::Actuacion,
                actuacion::models::CreateActuacionRequest,
                actuacion::models::UpdateActuacionRequest,
                cita::models::Cita,
                cita::models::CreateCitaRequest,
                cita::models::UpdateCitaRequest,
                documento::models::Documento,
                documento::models::DocumentoDto,
                documento::models::CreateDocumentoRequest,
                documento::models::UpdateDocumentoRequest,
                ErrorResponse,
            )
        ),
        tags(
            (name = "Clientes", description = "Gestión de clientes del despacho."),
            (name = "Expedientes", description = "Gestión de expedientes y su ciclo de estados."),
            (name = "Actuaciones", description = "Actuaciones procesales por expediente."),
            (name = "Citas", description = "Agenda de citas y señalamientos."),
            (name = "Documentos", description = "Documentos asociados a expedientes."),
            (name = "Reportes", description = "Generación y descarga de informes PDF.")
        ),
        servers(
            (url = "http://127.0.0.1:8080", description = "Localhost")
        )
    )]
    struct ApiDoc;

    dotenvy::dotenv().ok();
    let app_state = match AppState::new().await {
        Ok(state) => web::Data::new(state),
        Err(e) => {
            log::error!("No se pudo conectar a la base de datos. Revise DATABASE_URL en .env y que el servidor esté accesible. Error: {}", e);
            std::process::exit(1);
        }
    };

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| String::from("0.0.0.0:8080"));
    log::info!("Starting server at http://{}", bind_addr);

    HttpServer::new(move || {
        let app_state = app_state.clone();
        let cors = Cors::default()
            .allowed_origin("http://localhost:5173")
            .allowed_origin("http://localhost:3000")
            .allowed_origin("http://localhost:8080")
            .allowed_origin("http://127.0.0.1:8080")
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
            .allowed_headers(vec![
                header::AUTHORIZATION,
                header::ACCEPT,
                header::CONTENT_TYPE,
            ])
            .supports_credentials()
            .max_age(3600);

        App::new()
            .wrap(Compress::default())
            .wrap(cors)
            .app_data(app_state)
            .service(
                web::scope("/api")
                    .service(
                        web::resource("/clientes")
                            .route(web::get().to(cliente::handlers::get_all_clientes))
                            .route(web::post().to(cliente::handlers::create_cliente)),
                    )
                    .service(
                        web::resource("/clientes/buscar")
                            .route(web::get().to(cliente::handlers::search_clientes)),
                    )
                    .service(
                        web::resource("/clientes/{id}")
                            .route(web::get().to(cliente::handlers::get_cliente_by_id))
                            .route(web::put().to(cliente::handlers::update_cliente))
                            .route(web::delete().to(cliente::handlers::delete_cliente)),
                    )
                    .service(
                        web::resource("/expedientes")
                            .route(web::get().to(expediente::handlers::get_all_expedientes))
                            .route(web::post().to(expediente::handlers::create_expediente)),
                    )
                    .service(
                        web::resource("/expedientes/buscar")
                            .route(web::get().to(expediente::handlers::search_expedientes)),
                    )
                    .service(
                        web::resource("/expedientes/resumen")
                            .route(web::get().to(expediente::handlers::get_expedientes_resumen)),
                    )
                    .service(
                        web::resource("/expedientes/cliente/{cliente_id}").route(
                            web::get().to(expediente::handlers::get_expedientes_by_cliente),
                        ),
                    )
                    .service(
                        web::resource("/expedientes/estado/{estado}").route(
                            web::get().to(expediente::handlers::get_expedientes_by_estado),
                        ),
                    )
                    .service(
                        web::resource("/expedientes/{id}")
                            .route(web::get().to(expediente::handlers::get_expediente_by_id))
                            .route(web::put().to(expediente::handlers::update_expediente))
                            .route(web::delete().to(expediente::handlers::delete_expediente)),
                    )
                    .service(
                        web::resource("/actuaciones")
                            .route(web::get().to(actuacion::handlers::get_all_actuaciones))
                            .route(web::post().to(actuacion::handlers::create_actuacion)),
                    )
                    .service(
                        web::resource("/actuaciones/rango-fechas").route(
                            web::get().to(actuacion::handlers::get_actuaciones_by_rango_fechas),
                        ),
                    )
                    .service(
                        web::resource("/actuaciones/expediente/{expediente_id}").route(
                            web::get().to(actuacion::handlers::get_actuaciones_by_expediente),
                        ),
                    )
                    .service(
                        web::resource("/actuaciones/{id}")
                            .route(web::get().to(actuacion::handlers::get_actuacion_by_id))
                            .route(web::put().to(actuacion::handlers::update_actuacion))
                            .route(web::delete().to(actuacion::handlers::delete_actuacion)),
                    )
                    .service(
                        web::resource("/citas")
                            .route(web::get().to(cita::handlers::get_all_citas))
                            .route(web::post().to(cita::handlers::create_cita)),
                    )
                    .service(
                        web::resource("/citas/rango-fechas")
                            .route(web::get().to(cita::handlers::get_citas_by_rango_fechas)),
                    )
                    .service(
                        web::resource("/citas/pendientes")
                            .route(web::get().to(cita::handlers::get_citas_pendientes)),
                    )
                    .service(
                        web::resource("/citas/expediente/{expediente_id}")
                            .route(web::get().to(cita::handlers::get_citas_by_expediente)),
                    )
                    .service(
                        web::resource("/citas/{id}")
                            .route(web::get().to(cita::handlers::get_cita_by_id))
                            .route(web::put().to(cita::handlers::update_cita))
                            .route(web::delete().to(cita::handlers::delete_cita)),
                    )
                    .service(
                        web::resource("/documentos")
                            .route(web::get().to(documento::handlers::get_all_documentos))
                            .route(web::post().to(documento::handlers::create_documento)),
                    )
                    .service(
                        web::resource("/documentos/tipo/{tipo}")
                            .route(web::get().to(documento::handlers::get_documentos_by_tipo)),
                    )
                    .service(
                        web::resource("/documentos/expediente/{expediente_id}").route(
                            web::get().to(documento::handlers::get_documentos_by_expediente),
                        ),
                    )
                    .service(
                        web::resource("/documentos/{id}")
                            .route(web::get().to(documento::handlers::get_documento_by_id))
                            .route(web::put().to(documento::handlers::update_documento))
                            .route(web::delete().to(documento::handlers::delete_documento)),
                    )
                    .service(
                        web::resource("/reportes/clientes")
                            .route(web::get().to(reportes::handlers::generar_informe_clientes)),
                    )
                    .service(
                        web::resource("/reportes/expedientes-por-estado").route(
                            web::get()
                                .to(reportes::handlers::generar_informe_expedientes_por_estado),
                        ),
                    )
                    .service(
                        web::resource("/reportes/actuaciones-por-expediente").route(
                            web::get()
                                .to(reportes::handlers::generar_informe_actuaciones_por_expediente),
                        ),
                    )
                    .service(
                        web::resource("/reportes/descargar/{documento_id}")
                            .route(web::get().to(reportes::handlers::descargar_reporte)),
                    ),
            )
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
    })
    .backlog(8192)
    .keep_alive(actix_web::http::KeepAlive::Os)
    .bind(bind_addr.as_str())?
    .run()
    .await
}
