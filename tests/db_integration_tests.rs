//! Pruebas contra una base de datos real. Requieren `TEST_DATABASE_URL`
//! apuntando a un PostgreSQL vacío y se ejecutan con `cargo test -- --ignored`.

#[cfg(test)]
mod db_integration_tests {
    use abogados_server::cita::models::Cita;
    use abogados_server::cliente::models::Cliente;
    use abogados_server::db::AppState;
    use abogados_server::documento::models::CreateDocumentoRequest;
    use abogados_server::expediente::models::{Estado, Expediente};
    use abogados_server::actuacion::models::Actuacion;
    use abogados_server::reportes::{service, ReportKind};
    use chrono::{Duration, Local};
    use sqlx::PgPool;

    async fn setup_test_db() -> PgPool {
        let database_url = std::env::var("TEST_DATABASE_URL")
            .expect("TEST_DATABASE_URL debe apuntar a la base de datos de pruebas");

        let pool = PgPool::connect(&database_url)
            .await
            .expect("no se pudo conectar a la base de datos de pruebas");

        let schema = include_str!("../schema.sql");
        for sentencia in schema.split(';').map(str::trim).filter(|s| !s.is_empty()) {
            sqlx::query(sentencia).execute(&pool).await.unwrap();
        }

        pool
    }

    async fn cleanup_test_data(pool: &PgPool) {
        let _ = sqlx::query(
            "TRUNCATE TABLE documentos, citas, actuaciones, expedientes, clientes RESTART IDENTITY CASCADE",
        )
        .execute(pool)
        .await;
    }

    fn cliente_de_prueba(dni: &str) -> Cliente {
        Cliente {
            id: 0,
            nombre: "Ana".to_string(),
            apellidos: "García".to_string(),
            dni_cif: dni.to_string(),
            telefono: Some("600123456".to_string()),
            email: Some("ana@example.com".to_string()),
            direccion: None,
            ciudad: Some("Madrid".to_string()),
            codigo_postal: None,
            observaciones: None,
            fecha_alta: Local::now().naive_local(),
            fecha_modificacion: None,
        }
    }

    fn expediente_de_prueba(numero: &str, cliente_id: i32) -> Expediente {
        Expediente {
            id: 0,
            numero_expediente: numero.to_string(),
            asunto: "Reclamación de cantidad".to_string(),
            descripcion: None,
            tipo_expediente: "Civil".to_string(),
            estado: Estado::Abierto,
            cliente_id,
            juzgado_tribunal: None,
            numero_procedimiento: None,
            fecha_apertura: Local::now().naive_local(),
            fecha_cierre: None,
            fecha_modificacion: None,
            observaciones: None,
        }
    }

    #[tokio::test]
    #[ignore]
    async fn test_cliente_crud() {
        let pool = setup_test_db().await;
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::new_with_pool(pool.clone(), dir.path().to_path_buf());

        let creado = state
            .insert_cliente(&cliente_de_prueba("11111111A"))
            .await
            .unwrap();
        assert!(creado.id > 0);

        let recuperado = state.get_cliente_by_id(creado.id).await.unwrap().unwrap();
        assert_eq!(recuperado.dni_cif, "11111111A");

        let mut modificado = recuperado;
        modificado.ciudad = Some("Sevilla".to_string());
        modificado.fecha_modificacion = Some(Local::now().naive_local());
        state.update_cliente(&modificado).await.unwrap();

        let releido = state.get_cliente_by_id(creado.id).await.unwrap().unwrap();
        assert_eq!(releido.ciudad.as_deref(), Some("Sevilla"));

        assert!(state.delete_cliente(creado.id).await.unwrap());
        assert!(state.get_cliente_by_id(creado.id).await.unwrap().is_none());

        cleanup_test_data(&pool).await;
    }

    #[tokio::test]
    #[ignore]
    async fn test_expedientes_por_estado_filtra() {
        let pool = setup_test_db().await;
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::new_with_pool(pool.clone(), dir.path().to_path_buf());

        let cliente = state
            .insert_cliente(&cliente_de_prueba("22222222B"))
            .await
            .unwrap();

        let mut abierto = expediente_de_prueba("EXP-2024-001", cliente.id);
        state.insert_expediente(&abierto).await.unwrap();

        abierto.numero_expediente = "EXP-2024-002".to_string();
        abierto.estado = Estado::Cerrado;
        state.insert_expediente(&abierto).await.unwrap();

        let abiertos = state.get_expedientes_by_estado(Estado::Abierto).await.unwrap();
        assert_eq!(abiertos.len(), 1);
        assert_eq!(abiertos[0].numero_expediente, "EXP-2024-001");

        let del_cliente = state.get_expedientes_by_cliente(cliente.id).await.unwrap();
        assert_eq!(del_cliente.len(), 2);

        cleanup_test_data(&pool).await;
    }

    fn actuacion_de_prueba(expediente_id: i32, descripcion: &str) -> Actuacion {
        Actuacion {
            id: 0,
            expediente_id,
            fecha_actuacion: Local::now().naive_local(),
            tipo_actuacion: "Escrito".to_string(),
            descripcion: descripcion.to_string(),
            resultado: None,
            responsable: None,
            observaciones: None,
            fecha_registro: Local::now().naive_local(),
            fecha_modificacion: None,
        }
    }

    fn cita_de_prueba(expediente_id: i32, titulo: &str, inicio: chrono::NaiveDateTime) -> Cita {
        Cita {
            id: 0,
            expediente_id,
            titulo: titulo.to_string(),
            descripcion: None,
            fecha_inicio: inicio,
            fecha_fin: inicio + Duration::hours(1),
            lugar: None,
            tipo_cita: "Vista".to_string(),
            participantes: None,
            completada: false,
            observaciones: None,
            fecha_creacion: Local::now().naive_local(),
            fecha_modificacion: None,
        }
    }

    #[tokio::test]
    #[ignore]
    async fn test_busqueda_de_clientes_y_expedientes() {
        let pool = setup_test_db().await;
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::new_with_pool(pool.clone(), dir.path().to_path_buf());

        let mut otro = cliente_de_prueba("55555555E");
        otro.nombre = "Pedro".to_string();
        otro.apellidos = "Martínez".to_string();
        otro.email = Some("pedro@example.com".to_string());
        let ana = state
            .insert_cliente(&cliente_de_prueba("44444444D"))
            .await
            .unwrap();
        state.insert_cliente(&otro).await.unwrap();

        let por_apellido = state.search_clientes("garc").await.unwrap();
        assert_eq!(por_apellido.len(), 1);
        assert_eq!(por_apellido[0].dni_cif, "44444444D");

        let por_email = state.search_clientes("PEDRO@").await.unwrap();
        assert_eq!(por_email.len(), 1);
        assert_eq!(por_email[0].apellidos, "Martínez");

        // Término en blanco devuelve el listado completo.
        assert_eq!(state.search_clientes("  ").await.unwrap().len(), 2);
        assert!(state.search_clientes("zzz").await.unwrap().is_empty());

        let mut laboral = expediente_de_prueba("EXP-2024-010", ana.id);
        laboral.tipo_expediente = "Laboral".to_string();
        state.insert_expediente(&laboral).await.unwrap();
        state
            .insert_expediente(&expediente_de_prueba("EXP-2024-011", ana.id))
            .await
            .unwrap();

        let por_tipo = state.search_expedientes("laboral").await.unwrap();
        assert_eq!(por_tipo.len(), 1);
        assert_eq!(por_tipo[0].numero_expediente, "EXP-2024-010");

        let por_numero = state.search_expedientes("EXP-2024").await.unwrap();
        assert_eq!(por_numero.len(), 2);

        let resumen = state.get_expedientes_resumen().await.unwrap();
        assert_eq!(resumen.len(), 2);
        assert!(resumen.iter().all(|r| r.cliente_nombre == "Ana García"));
        assert!(resumen.iter().any(|r| r.estado == Estado::Abierto));

        cleanup_test_data(&pool).await;
    }

    #[tokio::test]
    #[ignore]
    async fn test_consultas_por_rango_pendientes_y_tipo() {
        let pool = setup_test_db().await;
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::new_with_pool(pool.clone(), dir.path().to_path_buf());

        let cliente = state
            .insert_cliente(&cliente_de_prueba("66666666F"))
            .await
            .unwrap();
        let expediente = state
            .insert_expediente(&expediente_de_prueba("EXP-2024-020", cliente.id))
            .await
            .unwrap();

        let ahora = Local::now().naive_local();
        let mut antigua = actuacion_de_prueba(expediente.id, "Diligencia antigua");
        antigua.fecha_actuacion = ahora - Duration::days(30);
        state.insert_actuacion(&antigua).await.unwrap();
        state
            .insert_actuacion(&actuacion_de_prueba(expediente.id, "Escrito reciente"))
            .await
            .unwrap();

        let recientes = state
            .get_actuaciones_by_rango_fechas(ahora - Duration::days(7), ahora + Duration::days(1))
            .await
            .unwrap();
        assert_eq!(recientes.len(), 1);
        assert_eq!(recientes[0].descripcion, "Escrito reciente");

        let mut pasada = cita_de_prueba(expediente.id, "Vista pasada", ahora - Duration::days(2));
        pasada.completada = true;
        state.insert_cita(&pasada).await.unwrap();
        state
            .insert_cita(&cita_de_prueba(
                expediente.id,
                "Señalamiento",
                ahora + Duration::days(3),
            ))
            .await
            .unwrap();

        let en_rango = state
            .get_citas_by_rango_fechas(ahora - Duration::days(7), ahora + Duration::days(7))
            .await
            .unwrap();
        assert_eq!(en_rango.len(), 2);
        assert_eq!(en_rango[0].titulo, "Vista pasada");

        let pendientes = state.get_citas_pendientes(ahora).await.unwrap();
        assert_eq!(pendientes.len(), 1);
        assert_eq!(pendientes[0].titulo, "Señalamiento");

        state
            .insert_documento(&CreateDocumentoRequest {
                expediente_id: Some(expediente.id),
                nombre_archivo: "contrato.pdf".to_string(),
                descripcion: None,
                tipo_documento: "Contrato".to_string(),
                ruta_archivo: "/tmp/contrato.pdf".to_string(),
                tamano_bytes: 1024,
                extension: Some(".pdf".to_string()),
                cargado_por: None,
                observaciones: None,
            })
            .await
            .unwrap();

        let contratos = state.get_documentos_by_tipo("CONTRATO").await.unwrap();
        assert_eq!(contratos.len(), 1);
        assert_eq!(contratos[0].nombre_archivo, "contrato.pdf");
        assert!(state.get_documentos_by_tipo("Factura").await.unwrap().is_empty());

        cleanup_test_data(&pool).await;
    }

    #[tokio::test]
    #[ignore]
    async fn test_generar_y_descargar_reporte() {
        let pool = setup_test_db().await;
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::new_with_pool(pool.clone(), dir.path().to_path_buf());

        let cliente = state
            .insert_cliente(&cliente_de_prueba("33333333C"))
            .await
            .unwrap();
        let expediente = state
            .insert_expediente(&expediente_de_prueba("EXP-2024-003", cliente.id))
            .await
            .unwrap();
        state
            .insert_actuacion(&Actuacion {
                id: 0,
                expediente_id: expediente.id,
                fecha_actuacion: Local::now().naive_local(),
                tipo_actuacion: "Escrito".to_string(),
                descripcion: "Presentación de demanda".to_string(),
                resultado: None,
                responsable: None,
                observaciones: None,
                fecha_registro: Local::now().naive_local(),
                fecha_modificacion: None,
            })
            .await
            .unwrap();

        for kind in [
            ReportKind::Clientes,
            ReportKind::ExpedientesPorEstado,
            ReportKind::ActuacionesPorExpediente,
        ] {
            let documento = service::generar(&state, kind).await.unwrap();
            assert_eq!(documento.tipo_documento, kind.tipo_documento());
            assert_eq!(documento.cargado_por.as_deref(), Some("Sistema"));
            assert!(documento.expediente_id.is_none());

            let descarga = service::descargar(&state, documento.id).await.unwrap();
            assert_eq!(&descarga.bytes[..5], b"%PDF-");
            assert_eq!(descarga.nombre_archivo, documento.nombre_archivo);
        }

        cleanup_test_data(&pool).await;
    }

    #[tokio::test]
    #[ignore]
    async fn test_descargar_documento_inexistente() {
        let pool = setup_test_db().await;
        let dir = tempfile::tempdir().unwrap();
        let state = AppState::new_with_pool(pool.clone(), dir.path().to_path_buf());

        let resultado = service::descargar(&state, 999_999).await;
        assert!(matches!(
            resultado,
            Err(abogados_server::reportes::ReportError::DocumentoNotFound(999_999))
        ));

        cleanup_test_data(&pool).await;
    }
}
