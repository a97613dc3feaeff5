#[cfg(test)]
mod aggregator_tests {
    use abogados_server::expediente::models::Estado;
    use abogados_server::reportes::actuaciones_por_expediente::{
        agregar_actuaciones, ActuacionReporteRow, ExpedienteActividadRow,
    };
    use abogados_server::reportes::clientes::{agregar_directorio, ClienteDirectorioRow};
    use abogados_server::reportes::expedientes_por_estado::{
        agregar_por_estado, ExpedienteEstadoRow,
    };
    use chrono::NaiveDate;

    fn cliente(id: i32, nombre: &str, apellidos: &str, ciudad: Option<&str>, num: i64) -> ClienteDirectorioRow {
        ClienteDirectorioRow {
            id,
            nombre: nombre.to_string(),
            apellidos: apellidos.to_string(),
            dni_cif: format!("0000000{id}A"),
            telefono: None,
            email: None,
            ciudad: ciudad.map(str::to_string),
            num_expedientes: num,
        }
    }

    fn fecha(dia: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, dia)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    fn expediente_estado(
        id: i32,
        numero: &str,
        estado: Estado,
        dia: u32,
    ) -> ExpedienteEstadoRow {
        ExpedienteEstadoRow {
            id,
            numero_expediente: numero.to_string(),
            asunto: "Asunto".to_string(),
            estado,
            fecha_apertura: fecha(dia),
            cliente_nombre: "Ana".to_string(),
            cliente_apellidos: "García".to_string(),
            num_actuaciones: 0,
        }
    }

    #[test]
    fn test_directorio_ordena_por_apellidos_y_nombre() {
        let filas = vec![
            cliente(1, "Carlos", "Zamora", None, 1),
            cliente(2, "Beatriz", "Alonso", None, 0),
            cliente(3, "Ana", "Alonso", None, 2),
        ];
        let datos = agregar_directorio(filas);
        let orden: Vec<i32> = datos.clientes.iter().map(|c| c.id).collect();
        assert_eq!(orden, vec![3, 2, 1]);
    }

    #[test]
    fn test_directorio_orden_insensible_a_mayusculas() {
        let filas = vec![
            cliente(1, "ana", "garcía", None, 0),
            cliente(2, "Ana", "ALONSO", None, 0),
        ];
        let datos = agregar_directorio(filas);
        assert_eq!(datos.clientes[0].id, 2);
    }

    #[test]
    fn test_directorio_estadisticas() {
        let filas = vec![
            cliente(1, "Ana", "García", Some("Madrid"), 2),
            cliente(2, "Luis", "Pérez", Some("Madrid"), 1),
            cliente(3, "Eva", "Ruiz", Some("Sevilla"), 0),
            cliente(4, "Mar", "Soto", Some(""), 1),
            cliente(5, "Sol", "Vega", None, 0),
        ];
        let datos = agregar_directorio(filas);
        assert_eq!(datos.total_clientes, 5);
        assert_eq!(datos.total_expedientes, 4);
        // La ciudad vacía y la ausente no cuentan como ciudades.
        assert_eq!(datos.ciudades_distintas, 2);
        assert!((datos.media_expedientes - 0.8).abs() < f64::EPSILON);
    }

    #[test]
    fn test_directorio_vacio() {
        let datos = agregar_directorio(Vec::new());
        assert_eq!(datos.total_clientes, 0);
        assert_eq!(datos.total_expedientes, 0);
        assert_eq!(datos.media_expedientes, 0.0);
    }

    #[test]
    fn test_por_estado_agrupa_en_orden_de_ciclo() {
        let filas = vec![
            expediente_estado(1, "EXP-3", Estado::Cerrado, 1),
            expediente_estado(2, "EXP-1", Estado::Abierto, 2),
            expediente_estado(3, "EXP-2", Estado::Abierto, 5),
        ];
        let datos = agregar_por_estado(filas);
        assert_eq!(datos.total_expedientes, 3);
        assert_eq!(datos.grupos.len(), 2);
        assert_eq!(datos.grupos[0].estado, Estado::Abierto);
        assert_eq!(datos.grupos[1].estado, Estado::Cerrado);
        // Dentro del grupo, apertura más reciente primero.
        assert_eq!(datos.grupos[0].expedientes[0].id, 3);
        assert_eq!(datos.grupos[0].expedientes[1].id, 2);
    }

    #[test]
    fn test_por_estado_conteos_incluyen_estados_vacios() {
        let filas = vec![expediente_estado(1, "EXP-1", Estado::EnTramite, 1)];
        let datos = agregar_por_estado(filas);
        assert_eq!(datos.conteos.len(), 5);
        for (estado, conteo) in datos.conteos {
            let esperado = if estado == Estado::EnTramite { 1 } else { 0 };
            assert_eq!(conteo, esperado);
        }
        // Pero solo hay sección para el estado con expedientes.
        assert_eq!(datos.grupos.len(), 1);
    }

    fn expediente_actividad(id: i32, numero: &str) -> ExpedienteActividadRow {
        ExpedienteActividadRow {
            id,
            numero_expediente: numero.to_string(),
            asunto: "Asunto".to_string(),
            estado: Estado::Abierto,
            cliente_nombre: "Ana".to_string(),
            cliente_apellidos: "García".to_string(),
        }
    }

    fn actuacion(id: i32, expediente_id: i32, dia: u32, tipo: &str) -> ActuacionReporteRow {
        ActuacionReporteRow {
            id,
            expediente_id,
            fecha_actuacion: fecha(dia),
            tipo_actuacion: tipo.to_string(),
            descripcion: "Detalle".to_string(),
        }
    }

    #[test]
    fn test_actuaciones_agrupa_y_ordena_por_fecha_descendente() {
        let expedientes = vec![expediente_actividad(1, "EXP-1")];
        let actuaciones = vec![
            actuacion(1, 1, 10, "Escrito"),
            actuacion(2, 1, 20, "Vista"),
            actuacion(3, 1, 15, "Notificación"),
        ];
        let datos = agregar_actuaciones(expedientes, actuaciones);
        assert_eq!(datos.expedientes.len(), 1);
        let orden: Vec<i32> = datos.expedientes[0]
            .actuaciones
            .iter()
            .map(|a| a.id)
            .collect();
        assert_eq!(orden, vec![2, 3, 1]);
    }

    #[test]
    fn test_actuaciones_excluye_expedientes_sin_actividad() {
        let expedientes = vec![
            expediente_actividad(1, "EXP-2"),
            expediente_actividad(2, "EXP-1"),
        ];
        let actuaciones = vec![actuacion(1, 2, 10, "Escrito")];
        let datos = agregar_actuaciones(expedientes, actuaciones);
        assert_eq!(datos.expedientes.len(), 1);
        assert_eq!(datos.expedientes[0].expediente.id, 2);
    }

    #[test]
    fn test_actuaciones_ordena_expedientes_por_numero() {
        let expedientes = vec![
            expediente_actividad(1, "EXP-2"),
            expediente_actividad(2, "EXP-1"),
        ];
        let actuaciones = vec![actuacion(1, 1, 10, "Escrito"), actuacion(2, 2, 11, "Vista")];
        let datos = agregar_actuaciones(expedientes, actuaciones);
        let numeros: Vec<&str> = datos
            .expedientes
            .iter()
            .map(|e| e.expediente.numero_expediente.as_str())
            .collect();
        assert_eq!(numeros, vec!["EXP-1", "EXP-2"]);
    }

    #[test]
    fn test_actuaciones_estadisticas() {
        let expedientes = vec![
            expediente_actividad(1, "EXP-1"),
            expediente_actividad(2, "EXP-2"),
        ];
        let actuaciones = vec![
            actuacion(1, 1, 10, "Escrito"),
            actuacion(2, 1, 11, "Vista"),
            actuacion(3, 2, 12, "Escrito"),
            // Huérfana de un expediente que no entra en el reporte.
            actuacion(4, 99, 13, "Recurso"),
        ];
        let datos = agregar_actuaciones(expedientes, actuaciones);
        assert_eq!(datos.total_actuaciones, 3);
        assert_eq!(datos.tipos_distintos, 2);
        assert!((datos.media_por_expediente - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_actuaciones_sin_datos() {
        let datos = agregar_actuaciones(Vec::new(), Vec::new());
        assert!(datos.expedientes.is_empty());
        assert_eq!(datos.total_actuaciones, 0);
        assert_eq!(datos.media_por_expediente, 0.0);
    }
}
