#[cfg(test)]
mod model_tests {
    use abogados_server::documento::models::{Documento, DocumentoDto};
    use abogados_server::expediente::models::{Estado, Expediente};
    use chrono::NaiveDate;

    #[test]
    fn test_estado_se_serializa_como_entero() {
        assert_eq!(serde_json::to_string(&Estado::Abierto).unwrap(), "1");
        assert_eq!(serde_json::to_string(&Estado::Cerrado).unwrap(), "5");
    }

    #[test]
    fn test_estado_se_deserializa_desde_entero() {
        let estado: Estado = serde_json::from_str("2").unwrap();
        assert_eq!(estado, Estado::EnTramite);
        assert!(serde_json::from_str::<Estado>("9").is_err());
    }

    #[test]
    fn test_expediente_json_lleva_estado_numerico() {
        let expediente = Expediente {
            id: 7,
            numero_expediente: "EXP-2024-007".to_string(),
            asunto: "Reclamación".to_string(),
            descripcion: None,
            tipo_expediente: "Civil".to_string(),
            estado: Estado::Suspendido,
            cliente_id: 1,
            juzgado_tribunal: None,
            numero_procedimiento: None,
            fecha_apertura: NaiveDate::from_ymd_opt(2024, 1, 15)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
            fecha_cierre: None,
            fecha_modificacion: None,
            observaciones: None,
        };

        let json: serde_json::Value = serde_json::to_value(&expediente).unwrap();
        assert_eq!(json["estado"], serde_json::json!(3));
        assert_eq!(json["numero_expediente"], serde_json::json!("EXP-2024-007"));
    }

    #[test]
    fn test_documento_dto_formatea_el_tamano() {
        let documento = Documento {
            id: 1,
            expediente_id: Some(4),
            nombre_archivo: "contrato.pdf".to_string(),
            descripcion: None,
            tipo_documento: "Contrato".to_string(),
            ruta_archivo: "/datos/contrato.pdf".to_string(),
            tamano_bytes: 1536,
            extension: Some(".pdf".to_string()),
            fecha_carga: NaiveDate::from_ymd_opt(2024, 2, 1)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
            cargado_por: Some("Letrado".to_string()),
            fecha_modificacion: None,
            observaciones: None,
        };

        let dto = DocumentoDto::from(documento);
        assert_eq!(dto.tamano_formateado, "1.5 KB");
        assert_eq!(dto.tamano_bytes, 1536);
        assert_eq!(dto.expediente_id, Some(4));
    }

    #[test]
    fn test_orden_del_ciclo_de_vida() {
        assert!(Estado::Abierto < Estado::EnTramite);
        assert!(Estado::Archivado < Estado::Cerrado);
        let ordinales: Vec<i32> = Estado::TODOS.iter().map(|e| i32::from(*e)).collect();
        assert_eq!(ordinales, vec![1, 2, 3, 4, 5]);
    }
}
