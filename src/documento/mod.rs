//! Documentos asociados a expedientes y reportes generados.

pub mod handlers;
pub mod models;
