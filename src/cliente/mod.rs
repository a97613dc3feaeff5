//! Clientes del despacho: datos de contacto y alta/baja.

pub mod handlers;
pub mod models;
