//! Expedientes: casos del despacho con su ciclo de vida de estados.

pub mod handlers;
pub mod models;
