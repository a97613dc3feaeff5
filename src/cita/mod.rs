//! Citas de agenda vinculadas a un expediente.

pub mod handlers;
pub mod models;
