#[cfg(test)]
mod report_service_tests {
    use abogados_server::documento::models::Documento;
    use abogados_server::reportes::service::{guardar_pdf, leer_reporte, nombre_archivo};
    use abogados_server::reportes::{ReportError, ReportKind};
    use chrono::Local;

    fn documento_con_ruta(ruta: &str) -> Documento {
        Documento {
            id: 1,
            expediente_id: None,
            nombre_archivo: "InformeClientes_test.pdf".to_string(),
            descripcion: None,
            tipo_documento: "Informe de Clientes".to_string(),
            ruta_archivo: ruta.to_string(),
            tamano_bytes: 4,
            extension: Some(".pdf".to_string()),
            fecha_carga: Local::now().naive_local(),
            cargado_por: Some("Sistema".to_string()),
            fecha_modificacion: None,
            observaciones: None,
        }
    }

    #[test]
    fn test_nombre_archivo_lleva_prefijo_y_extension() {
        let nombre = nombre_archivo(ReportKind::Clientes, &Local::now());
        assert!(nombre.starts_with("InformeClientes_"));
        assert!(nombre.ends_with(".pdf"));
    }

    #[test]
    fn test_nombre_archivo_distingue_milisegundos() {
        let base = Local::now();
        let despues = base + chrono::Duration::milliseconds(1);
        assert_ne!(
            nombre_archivo(ReportKind::Clientes, &base),
            nombre_archivo(ReportKind::Clientes, &despues)
        );
    }

    #[test]
    fn test_guardar_pdf_crea_directorio_y_archivo() {
        let dir = tempfile::tempdir().unwrap();
        let destino = dir.path().join("subdir");

        let (nombre, ruta) =
            guardar_pdf(&destino, ReportKind::ExpedientesPorEstado, b"%PDF-test").unwrap();

        assert!(nombre.starts_with("InformeExpedientesPorEstado_"));
        assert!(ruta.is_file());
        assert_eq!(std::fs::read(&ruta).unwrap(), b"%PDF-test");
    }

    #[test]
    fn test_guardar_pdf_no_sobrescribe_generaciones_consecutivas() {
        let dir = tempfile::tempdir().unwrap();

        let (_, primera) = guardar_pdf(dir.path(), ReportKind::Clientes, b"uno").unwrap();
        // El sufijo del nombre tiene resolución de milisegundos.
        std::thread::sleep(std::time::Duration::from_millis(2));
        let (_, segunda) = guardar_pdf(dir.path(), ReportKind::Clientes, b"dos").unwrap();

        assert_ne!(primera, segunda);
        assert_eq!(std::fs::read(&primera).unwrap(), b"uno");
        assert_eq!(std::fs::read(&segunda).unwrap(), b"dos");
    }

    #[test]
    fn test_leer_reporte_devuelve_los_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let ruta = dir.path().join("informe.pdf");
        std::fs::write(&ruta, b"%PDF-contenido").unwrap();

        let documento = documento_con_ruta(ruta.to_str().unwrap());
        let bytes = leer_reporte(&documento).unwrap();
        assert_eq!(bytes, b"%PDF-contenido");
    }

    #[test]
    fn test_leer_reporte_archivo_ausente() {
        let documento = documento_con_ruta("/no/existe/informe.pdf");
        match leer_reporte(&documento) {
            Err(ReportError::FileMissing(ruta)) => assert_eq!(ruta, "/no/existe/informe.pdf"),
            otro => panic!("se esperaba FileMissing, se obtuvo {otro:?}"),
        }
    }

    #[test]
    fn test_report_kind_metadata() {
        assert_eq!(ReportKind::Clientes.tipo_documento(), "Informe de Clientes");
        assert_eq!(
            ReportKind::ActuacionesPorExpediente.prefijo_archivo(),
            "InformeActuacionesPorExpediente"
        );
        assert!(!ReportKind::ExpedientesPorEstado.descripcion().is_empty());
    }
}
