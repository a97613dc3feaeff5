//! Generación de reportes PDF.
//!
//! Tres reportes independientes, cada uno con su agregador de datos:
//! - `clientes` - directorio de clientes con expedientes asociados
//! - `expedientes_por_estado` - expedientes agrupados por estado
//! - `actuaciones_por_expediente` - actuaciones agrupadas por expediente
//!
//! El flujo completo es agregar -> componer -> guardar en disco -> registrar
//! como Documento. Los agregadores y el compositor son puros; solo `service`
//! toca el sistema de archivos y la base de datos.

pub mod actuaciones_por_expediente;
pub mod clientes;
pub mod expedientes_por_estado;
pub mod format;
pub mod handlers;
pub mod pdf;
pub mod service;

use thiserror::Error;

/// Errores del pipeline de reportes.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("argumento inválido: {0}")]
    InvalidArgument(String),
    #[error("documento {0} no encontrado")]
    DocumentoNotFound(i32),
    #[error("el archivo del reporte no existe en el servidor: {0}")]
    FileMissing(String),
    #[error("error de base de datos: {0}")]
    Db(#[from] sqlx::Error),
    #[error("error de almacenamiento: {0}")]
    Storage(#[from] std::io::Error),
    #[error("error al componer el PDF: {0}")]
    Pdf(String),
}

/// Tipos de reporte disponibles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Clientes,
    ExpedientesPorEstado,
    ActuacionesPorExpediente,
}

impl ReportKind {
    /// Prefijo del nombre de archivo generado.
    pub fn prefijo_archivo(self) -> &'static str {
        match self {
            ReportKind::Clientes => "InformeClientes",
            ReportKind::ExpedientesPorEstado => "InformeExpedientesPorEstado",
            ReportKind::ActuacionesPorExpediente => "InformeActuacionesPorExpediente",
        }
    }

    /// Etiqueta de tipo con la que se registra el Documento.
    pub fn tipo_documento(self) -> &'static str {
        match self {
            ReportKind::Clientes => "Informe de Clientes",
            ReportKind::ExpedientesPorEstado => "Informe de Expedientes por Estado",
            ReportKind::ActuacionesPorExpediente => "Informe de Actuaciones por Expediente",
        }
    }

    /// Descripción del contenido del Documento registrado.
    pub fn descripcion(self) -> &'static str {
        match self {
            ReportKind::Clientes => {
                "Listado completo de clientes con información de contacto y expedientes asociados"
            }
            ReportKind::ExpedientesPorEstado => {
                "Expedientes agrupados por estado con totalizaciones de actuaciones y citas"
            }
            ReportKind::ActuacionesPorExpediente => {
                "Actuaciones agrupadas por expediente con subtotales por tipo y detalle cronológico"
            }
        }
    }
}
