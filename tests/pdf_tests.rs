#[cfg(test)]
mod pdf_tests {
    use abogados_server::expediente::models::Estado;
    use abogados_server::reportes::actuaciones_por_expediente::{
        agregar_actuaciones, ActuacionReporteRow, ExpedienteActividadRow,
    };
    use abogados_server::reportes::clientes::{agregar_directorio, ClienteDirectorioRow};
    use abogados_server::reportes::expedientes_por_estado::{
        agregar_por_estado, ExpedienteEstadoRow,
    };
    use abogados_server::reportes::pdf;
    use chrono::NaiveDate;

    fn fecha(dia: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, dia)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    fn assert_es_pdf(bytes: &[u8]) {
        assert!(bytes.len() > 500, "PDF sospechosamente pequeño: {} bytes", bytes.len());
        assert_eq!(&bytes[..5], b"%PDF-");
    }

    /// Número de páginas del documento, contando los diccionarios con
    /// `/Type /Page` (el nodo raíz `/Type /Pages` no cuenta).
    fn contar_paginas(bytes: &[u8]) -> usize {
        let compacto: Vec<u8> = bytes
            .iter()
            .copied()
            .filter(|b| !b.is_ascii_whitespace())
            .collect();
        let aguja = b"/Type/Page";
        compacto
            .windows(aguja.len() + 1)
            .filter(|v| &v[..aguja.len()] == aguja && v[aguja.len()] != b's')
            .count()
    }

    #[test]
    fn test_componer_clientes_produce_pdf() {
        let filas = vec![
            ClienteDirectorioRow {
                id: 1,
                nombre: "Ana".to_string(),
                apellidos: "García López".to_string(),
                dni_cif: "12345678Z".to_string(),
                telefono: Some("600123456".to_string()),
                email: Some("ana@example.com".to_string()),
                ciudad: Some("Madrid".to_string()),
                num_expedientes: 3,
            },
            ClienteDirectorioRow {
                id: 2,
                nombre: "Luis".to_string(),
                apellidos: "Pérez".to_string(),
                dni_cif: "87654321X".to_string(),
                telefono: None,
                email: None,
                ciudad: None,
                num_expedientes: 0,
            },
        ];
        let bytes = pdf::componer_clientes(&agregar_directorio(filas)).unwrap();
        assert_es_pdf(&bytes);
    }

    #[test]
    fn test_componer_clientes_sin_clientes() {
        let bytes = pdf::componer_clientes(&agregar_directorio(Vec::new())).unwrap();
        assert_es_pdf(&bytes);
    }

    #[test]
    fn test_componer_expedientes_por_estado_produce_pdf() {
        let filas = vec![
            ExpedienteEstadoRow {
                id: 1,
                numero_expediente: "EXP-2024-001".to_string(),
                asunto: "Reclamación de cantidad frente a aseguradora por siniestro".to_string(),
                estado: Estado::Abierto,
                fecha_apertura: fecha(2),
                cliente_nombre: "Ana".to_string(),
                cliente_apellidos: "García".to_string(),
                num_actuaciones: 4,
            },
            ExpedienteEstadoRow {
                id: 2,
                numero_expediente: "EXP-2024-002".to_string(),
                asunto: "Despido improcedente".to_string(),
                estado: Estado::Cerrado,
                fecha_apertura: fecha(10),
                cliente_nombre: "Luis".to_string(),
                cliente_apellidos: "Pérez".to_string(),
                num_actuaciones: 0,
            },
        ];
        let bytes = pdf::componer_expedientes_por_estado(&agregar_por_estado(filas)).unwrap();
        assert_es_pdf(&bytes);
    }

    #[test]
    fn test_componer_actuaciones_produce_pdf() {
        let expedientes = vec![ExpedienteActividadRow {
            id: 1,
            numero_expediente: "EXP-2024-001".to_string(),
            asunto: "Reclamación de cantidad".to_string(),
            estado: Estado::EnTramite,
            cliente_nombre: "Ana".to_string(),
            cliente_apellidos: "García".to_string(),
        }];
        let actuaciones = vec![
            ActuacionReporteRow {
                id: 1,
                expediente_id: 1,
                fecha_actuacion: fecha(3),
                tipo_actuacion: "Escrito".to_string(),
                descripcion: "Presentación de demanda en el juzgado de primera instancia"
                    .to_string(),
            },
            ActuacionReporteRow {
                id: 2,
                expediente_id: 1,
                fecha_actuacion: fecha(20),
                tipo_actuacion: "Vista".to_string(),
                descripcion: "Audiencia previa".to_string(),
            },
        ];
        let bytes =
            pdf::componer_actuaciones(&agregar_actuaciones(expedientes, actuaciones)).unwrap();
        assert_es_pdf(&bytes);
    }

    #[test]
    fn test_paginacion_con_muchas_filas() {
        // Suficientes clientes para forzar varios saltos de página.
        let filas: Vec<ClienteDirectorioRow> = (1..=120)
            .map(|i| ClienteDirectorioRow {
                id: i,
                nombre: format!("Nombre{i}"),
                apellidos: format!("Apellido{i}"),
                dni_cif: format!("{i:08}A"),
                telefono: Some("600000000".to_string()),
                email: Some(format!("c{i}@example.com")),
                ciudad: Some("Madrid".to_string()),
                num_expedientes: i64::from(i % 5),
            })
            .collect();
        let bytes = pdf::componer_clientes(&agregar_directorio(filas)).unwrap();
        assert_es_pdf(&bytes);
        // La tabla cruza de página, lo que obliga a repetir su cabecera en
        // cada página de continuación.
        assert!(
            contar_paginas(&bytes) >= 2,
            "se esperaban varias páginas, hay {}",
            contar_paginas(&bytes)
        );
    }
}
