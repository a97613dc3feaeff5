//! Actuaciones procesales registradas sobre un expediente.

pub mod handlers;
pub mod models;
