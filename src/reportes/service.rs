//! Fachada de reportes: agregar, componer, guardar y registrar.
//!
//! El orden es obligatorio: el PDF se escribe completo en disco antes de
//! insertar el registro Documento. Si la inserción falla, el archivo recién
//! escrito se elimina para no dejar artefactos huérfanos. Un fallo entre la
//! escritura y el registro por caída del proceso sí puede dejar un archivo
//! sin registro; es una limitación asumida, no un caso silenciado.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::db::AppState;
use crate::documento::models::{CreateDocumentoRequest, Documento, DocumentoDto};
use crate::reportes::{
    actuaciones_por_expediente, clientes, expedientes_por_estado, pdf, ReportError, ReportKind,
};

/// Resultado de una descarga: bytes del PDF y el nombre con el que se
/// registró, para etiquetar la transferencia.
#[derive(Debug)]
pub struct DescargaReporte {
    pub nombre_archivo: String,
    pub bytes: Vec<u8>,
}

/// Nombre de archivo con precisión de milisegundos. Dos reportes del mismo
/// tipo generados en el mismo segundo no colisionan.
pub fn nombre_archivo(kind: ReportKind, momento: &DateTime<Local>) -> String {
    format!(
        "{}_{}.pdf",
        kind.prefijo_archivo(),
        momento.format("%Y%m%d_%H%M%S_%3f")
    )
}

/// Escribe los bytes del reporte bajo `dir`, creando el directorio si no
/// existe. La creación es idempotente: dos generaciones concurrentes pueden
/// intentarla a la vez sin error.
pub fn guardar_pdf(
    dir: &Path,
    kind: ReportKind,
    bytes: &[u8],
) -> Result<(String, PathBuf), ReportError> {
    fs::create_dir_all(dir)?;
    let nombre = nombre_archivo(kind, &Local::now());
    let ruta = dir.join(&nombre);
    fs::write(&ruta, bytes)?;
    Ok((nombre, ruta))
}

/// Lee el PDF respaldado por un Documento. Que el registro exista pero el
/// archivo no es una inconsistencia detectable entre metadatos y
/// almacenamiento, y se señala de forma distinguible.
pub fn leer_reporte(documento: &Documento) -> Result<Vec<u8>, ReportError> {
    let ruta = Path::new(&documento.ruta_archivo);
    if !ruta.is_file() {
        return Err(ReportError::FileMissing(documento.ruta_archivo.clone()));
    }
    Ok(fs::read(ruta)?)
}

/// Genera el reporte indicado: consulta, agrega, compone, guarda en disco y
/// registra un Documento sin expediente asociado. Devuelve sus metadatos.
pub async fn generar(state: &AppState, kind: ReportKind) -> Result<DocumentoDto, ReportError> {
    log::info!("Generando {}", kind.tipo_documento());

    let bytes = match kind {
        ReportKind::Clientes => {
            let filas = state.get_clientes_directorio().await?;
            pdf::componer_clientes(&clientes::agregar_directorio(filas))?
        }
        ReportKind::ExpedientesPorEstado => {
            let filas = state.get_expedientes_reporte().await?;
            pdf::componer_expedientes_por_estado(&expedientes_por_estado::agregar_por_estado(filas))?
        }
        ReportKind::ActuacionesPorExpediente => {
            let expedientes = state.get_expedientes_con_actividad().await?;
            let actuaciones = state.get_actuaciones_reporte().await?;
            pdf::componer_actuaciones(&actuaciones_por_expediente::agregar_actuaciones(
                expedientes,
                actuaciones,
            ))?
        }
    };

    let (nombre, ruta) = guardar_pdf(&state.reports_dir, kind, &bytes)?;
    let ruta_absoluta = ruta.canonicalize().unwrap_or_else(|_| ruta.clone());
    log::info!(
        "Reporte guardado en {} ({} bytes)",
        ruta_absoluta.display(),
        bytes.len()
    );

    let registro = CreateDocumentoRequest {
        expediente_id: None,
        nombre_archivo: nombre,
        descripcion: Some(kind.descripcion().to_string()),
        tipo_documento: kind.tipo_documento().to_string(),
        ruta_archivo: ruta_absoluta.to_string_lossy().into_owned(),
        tamano_bytes: bytes.len() as i64,
        extension: Some(".pdf".to_string()),
        cargado_por: Some("Sistema".to_string()),
        observaciones: Some(format!(
            "Generado automáticamente el {}",
            Local::now().format("%d/%m/%Y %H:%M:%S")
        )),
    };

    match state.insert_documento(&registro).await {
        Ok(documento) => Ok(documento.into()),
        Err(e) => {
            log::error!("Fallo al registrar el reporte, eliminando {}", ruta.display());
            if let Err(borrado) = fs::remove_file(&ruta) {
                log::error!("No se pudo eliminar el archivo huérfano: {borrado}");
            }
            Err(e.into())
        }
    }
}

/// Recupera un reporte previamente generado por el id de su Documento.
pub async fn descargar(state: &AppState, documento_id: i32) -> Result<DescargaReporte, ReportError> {
    let documento = state
        .get_documento_by_id(documento_id)
        .await?
        .ok_or(ReportError::DocumentoNotFound(documento_id))?;
    let bytes = leer_reporte(&documento)?;
    Ok(DescargaReporte {
        nombre_archivo: documento.nombre_archivo,
        bytes,
    })
}
