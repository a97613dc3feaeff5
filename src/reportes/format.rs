//! Ayudas de formateo compartidas por los reportes.
//!
//! Funciones puras: etiquetas y colores por estado, tamaños de archivo en
//! unidades binarias, truncado con elipsis y medias con un decimal.

use crate::expediente::models::Estado;
use crate::reportes::ReportError;

/// Color RGB de 8 bits por canal.
pub type Rgb8 = (u8, u8, u8);

/// Etiqueta legible de un estado de expediente.
pub fn estado_label(estado: Estado) -> &'static str {
    match estado {
        Estado::Abierto => "Abierto",
        Estado::EnTramite => "En Trámite",
        Estado::Suspendido => "Suspendido",
        Estado::Archivado => "Archivado",
        Estado::Cerrado => "Cerrado",
    }
}

/// Color principal asociado a un estado (texto y bandas de sección).
pub fn estado_color(estado: Estado) -> Rgb8 {
    match estado {
        Estado::Abierto => (0x25, 0x63, 0xEB),
        Estado::EnTramite => (0x16, 0xA3, 0x4A),
        Estado::Suspendido => (0xD4, 0xAF, 0x37),
        Estado::Archivado => (0x8B, 0x73, 0x55),
        Estado::Cerrado => (0xDC, 0x26, 0x26),
    }
}

/// Color de fondo asociado a un estado (tarjetas de resumen).
pub fn estado_bg_color(estado: Estado) -> Rgb8 {
    match estado {
        Estado::Abierto => (0xDB, 0xEA, 0xFE),
        Estado::EnTramite => (0xDC, 0xFC, 0xE7),
        Estado::Suspendido => (0xFE, 0xF9, 0xC3),
        Estado::Archivado => (0xF3, 0xF4, 0xF6),
        Estado::Cerrado => (0xFE, 0xE2, 0xE2),
    }
}

const UNIDADES: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Formatea un tamaño en bytes con pasos binarios de 1024 y como mucho dos
/// decimales, sin ceros finales: `0 -> "0 B"`, `1536 -> "1.5 KB"`.
/// Un tamaño negativo no es un caso definido y se rechaza.
pub fn format_bytes(bytes: i64) -> Result<String, ReportError> {
    if bytes < 0 {
        return Err(ReportError::InvalidArgument(format!(
            "tamaño en bytes negativo: {bytes}"
        )));
    }

    let mut valor = bytes as f64;
    let mut orden = 0;
    while valor >= 1024.0 && orden < UNIDADES.len() - 1 {
        valor /= 1024.0;
        orden += 1;
    }

    let mut texto = format!("{valor:.2}");
    if texto.contains('.') {
        texto = texto.trim_end_matches('0').trim_end_matches('.').to_string();
    }
    Ok(format!("{} {}", texto, UNIDADES[orden]))
}

/// Recorta `texto` a `presupuesto` caracteres: si se pasa, conserva los
/// primeros `presupuesto - 3` y añade "...". Cuenta caracteres, no bytes.
pub fn truncate(texto: &str, presupuesto: usize) -> String {
    let longitud = texto.chars().count();
    if longitud <= presupuesto {
        return texto.to_string();
    }
    let corte: String = texto.chars().take(presupuesto.saturating_sub(3)).collect();
    format!("{corte}...")
}

/// Media con un solo decimal; con denominador cero devuelve "0".
pub fn format_ratio(numerador: i64, denominador: usize) -> String {
    if denominador == 0 {
        return "0".to_string();
    }
    format!("{:.1}", numerador as f64 / denominador as f64)
}
