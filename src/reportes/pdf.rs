//! Compositor de los reportes PDF.
//!
//! Construye un documento A4 paginado a partir de los datos ya agregados:
//! cabecera con la marca del despacho, tarjetas de resumen, secciones con
//! banda de color por estado, tablas con rayado alterno y nota de cierre.
//! El pie de página se dibuja al final, cuando ya se conoce el total de
//! páginas. Devuelve únicamente los bytes del PDF; no sabe nada de disco
//! ni de base de datos.

use std::io::BufWriter;

use chrono::Local;
use printpdf::path::PaintMode;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerIndex, PdfLayerReference, PdfPageIndex, Point, Rect, Rgb,
};

use crate::reportes::actuaciones_por_expediente::ActuacionesPorExpediente;
use crate::reportes::clientes::DirectorioClientes;
use crate::reportes::expedientes_por_estado::ExpedientesPorEstado;
use crate::reportes::format::{
    estado_bg_color, estado_color, estado_label, format_ratio, truncate, Rgb8,
};
use crate::reportes::ReportError;

// Paleta del despacho, la misma que usa la web.
const MARRON_PRIMARIO: Rgb8 = (0x5D, 0x4E, 0x37);
const MARRON_SECUNDARIO: Rgb8 = (0x8B, 0x73, 0x55);
const MARRON_CLARO: Rgb8 = (0xA0, 0x82, 0x6D);
const DORADO: Rgb8 = (0xD4, 0xAF, 0x37);
const DORADO_CLARO: Rgb8 = (0xE8, 0xC9, 0x61);
const DORADO_OSCURO: Rgb8 = (0xB8, 0x94, 0x1F);
const TEXTO: Rgb8 = (0x3E, 0x27, 0x23);
const TEXTO_TENUE: Rgb8 = (0x8B, 0x73, 0x55);
const FONDO: Rgb8 = (0xFA, 0xF8, 0xF3);
const FONDO_SECUNDARIO: Rgb8 = (0xF5, 0xF1, 0xE8);
const BORDE: Rgb8 = (0xD4, 0xC5, 0xB0);
const BLANCO: Rgb8 = (0xFF, 0xFF, 0xFF);

// Geometría A4 en milímetros.
const ANCHO_PAGINA: f32 = 210.0;
const ALTO_PAGINA: f32 = 297.0;
const MARGEN_IZQ: f32 = 15.0;
const MARGEN_DER: f32 = 195.0;
const ANCHO_UTIL: f32 = MARGEN_DER - MARGEN_IZQ;
const Y_INICIO: f32 = 282.0;
const Y_LIMITE: f32 = 25.0;

/// Presupuesto de caracteres del asunto en tablas de expedientes.
pub const MAX_ASUNTO: usize = 45;
/// Presupuesto de caracteres de la descripción en tablas de actuaciones.
pub const MAX_DESCRIPCION: usize = 70;

fn color(rgb: Rgb8) -> Color {
    Color::Rgb(Rgb::new(
        rgb.0 as f32 / 255.0,
        rgb.1 as f32 / 255.0,
        rgb.2 as f32 / 255.0,
        None,
    ))
}

/// Ancho aproximado de un texto Helvetica en milímetros. Suficiente para
/// centrar etiquetas cortas en tarjetas y celdas.
fn ancho_texto(texto: &str, tamano: f32) -> f32 {
    texto.chars().count() as f32 * tamano * 0.176
}

/// Columna de tabla: rótulo fijo y ancho en milímetros.
struct Columna {
    titulo: &'static str,
    ancho: f32,
}

/// Celda de datos con su estilo de texto.
struct Celda {
    texto: String,
    color: Rgb8,
    negrita: bool,
    centrada: bool,
}

impl Celda {
    fn normal(texto: impl Into<String>) -> Self {
        Celda {
            texto: texto.into(),
            color: TEXTO,
            negrita: false,
            centrada: false,
        }
    }

    fn destacada(texto: impl Into<String>, color: Rgb8) -> Self {
        Celda {
            texto: texto.into(),
            color,
            negrita: true,
            centrada: false,
        }
    }

    fn centrada(mut self) -> Self {
        self.centrada = true;
        self
    }

    fn con_color(mut self, color: Rgb8) -> Self {
        self.color = color;
        self
    }
}

/// Estado de composición: documento, páginas emitidas y cursor vertical.
struct Compositor {
    doc: PdfDocumentReference,
    paginas: Vec<(PdfPageIndex, PdfLayerIndex)>,
    fuente: IndirectFontRef,
    negrita: IndirectFontRef,
    cursiva: IndirectFontRef,
    y: f32,
}

impl Compositor {
    fn nuevo(titulo: &str) -> Result<Self, ReportError> {
        let (doc, pagina, capa) = PdfDocument::new(titulo, Mm(ANCHO_PAGINA), Mm(ALTO_PAGINA), "Capa 1");
        let fuente = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| ReportError::Pdf(e.to_string()))?;
        let negrita = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| ReportError::Pdf(e.to_string()))?;
        let cursiva = doc
            .add_builtin_font(BuiltinFont::HelveticaOblique)
            .map_err(|e| ReportError::Pdf(e.to_string()))?;

        let composidor = Compositor {
            doc,
            paginas: vec![(pagina, capa)],
            fuente,
            negrita,
            cursiva,
            y: ALTO_PAGINA,
        };
        composidor.fondo_pagina();
        Ok(composidor)
    }

    fn capa(&self) -> PdfLayerReference {
        let (pagina, capa) = self.paginas[self.paginas.len() - 1];
        self.doc.get_page(pagina).get_layer(capa)
    }

    fn fondo_pagina(&self) {
        self.rectangulo(0.0, 0.0, ANCHO_PAGINA, ALTO_PAGINA, FONDO);
    }

    fn nueva_pagina(&mut self) {
        let (pagina, capa) = self.doc.add_page(Mm(ANCHO_PAGINA), Mm(ALTO_PAGINA), "Capa 1");
        self.paginas.push((pagina, capa));
        self.fondo_pagina();
        self.y = Y_INICIO;
    }

    /// Salta de página si no queda sitio para un bloque de `alto` mm.
    fn asegurar(&mut self, alto: f32) {
        if self.y - alto < Y_LIMITE {
            self.nueva_pagina();
        }
    }

    fn rectangulo(&self, x: f32, y: f32, ancho: f32, alto: f32, relleno: Rgb8) {
        let capa = self.capa();
        capa.set_fill_color(color(relleno));
        capa.add_rect(
            Rect::new(Mm(x), Mm(y), Mm(x + ancho), Mm(y + alto)).with_mode(PaintMode::Fill),
        );
    }

    fn borde(&self, x: f32, y: f32, ancho: f32, alto: f32, trazo: Rgb8, grosor: f32) {
        let capa = self.capa();
        capa.set_outline_color(color(trazo));
        capa.set_outline_thickness(grosor);
        capa.add_rect(
            Rect::new(Mm(x), Mm(y), Mm(x + ancho), Mm(y + alto)).with_mode(PaintMode::Stroke),
        );
    }

    fn linea(&self, x1: f32, x2: f32, y: f32, trazo: Rgb8, grosor: f32) {
        let capa = self.capa();
        capa.set_outline_color(color(trazo));
        capa.set_outline_thickness(grosor);
        capa.add_line(Line {
            points: vec![
                (Point::new(Mm(x1), Mm(y)), false),
                (Point::new(Mm(x2), Mm(y)), false),
            ],
            is_closed: false,
        });
    }

    fn texto(&self, texto: &str, tamano: f32, x: f32, y: f32, fuente: &IndirectFontRef, tinta: Rgb8) {
        let capa = self.capa();
        capa.set_fill_color(color(tinta));
        capa.use_text(texto, tamano, Mm(x), Mm(y), fuente);
    }

    fn texto_centrado(
        &self,
        texto: &str,
        tamano: f32,
        centro_x: f32,
        y: f32,
        fuente: &IndirectFontRef,
        tinta: Rgb8,
    ) {
        let x = centro_x - ancho_texto(texto, tamano) / 2.0;
        self.texto(texto, tamano, x, y, fuente, tinta);
    }

    /// Cabecera de marca: banda marrón con barras doradas, nombre del
    /// despacho, título del informe, subtítulo y fecha de generación.
    fn cabecera(&mut self, titulo: &str, subtitulo: &str) {
        let ahora = Local::now();
        let tope = ALTO_PAGINA - 10.0;

        self.rectangulo(MARGEN_IZQ, tope - 42.0, ANCHO_UTIL, 42.0, MARRON_PRIMARIO);
        self.rectangulo(MARGEN_IZQ, tope, ANCHO_UTIL, 1.5, DORADO);
        self.rectangulo(MARGEN_IZQ, tope - 43.0, ANCHO_UTIL, 1.0, DORADO);

        self.texto("DESPACHO DE ABOGADOS", 18.0, MARGEN_IZQ + 6.0, tope - 10.0, &self.negrita, DORADO);
        self.texto("Gestión Jurídica Profesional", 8.0, MARGEN_IZQ + 6.0, tope - 15.0, &self.fuente, MARRON_CLARO);

        self.linea(MARGEN_IZQ + 6.0, MARGEN_DER - 6.0, tope - 19.0, DORADO, 0.8);

        self.texto(titulo, 14.0, MARGEN_IZQ + 6.0, tope - 27.0, &self.negrita, BLANCO);
        self.texto(subtitulo, 8.0, MARGEN_IZQ + 6.0, tope - 33.0, &self.fuente, MARRON_CLARO);

        let fecha = ahora.format("%d/%m/%Y").to_string();
        let hora = format!("{} hrs", ahora.format("%H:%M"));
        self.texto(&fecha, 8.0, MARGEN_DER - 6.0 - ancho_texto(&fecha, 8.0), tope - 27.0, &self.fuente, DORADO_CLARO);
        self.texto(&hora, 7.0, MARGEN_DER - 6.0 - ancho_texto(&hora, 7.0), tope - 32.0, &self.fuente, MARRON_CLARO);

        self.y = tope - 52.0;
    }

    /// Fila de tarjetas de estadística: valor grande y rótulo pequeño,
    /// cada una con su acento dorado superior.
    fn tarjetas(&mut self, tarjetas: &[(String, String)]) {
        if tarjetas.is_empty() {
            return;
        }
        let alto = 18.0;
        self.asegurar(alto + 4.0);
        let hueco = 4.0;
        let ancho = (ANCHO_UTIL - hueco * (tarjetas.len() as f32 - 1.0)) / tarjetas.len() as f32;
        let base = self.y - alto;

        for (i, (etiqueta, valor)) in tarjetas.iter().enumerate() {
            let x = MARGEN_IZQ + i as f32 * (ancho + hueco);
            self.rectangulo(x, base, ancho, alto, BLANCO);
            self.borde(x, base, ancho, alto, BORDE, 0.5);
            self.rectangulo(x, base + alto - 1.2, ancho, 1.2, DORADO);
            let centro = x + ancho / 2.0;
            self.texto_centrado(valor, 15.0, centro, base + 8.0, &self.negrita, MARRON_PRIMARIO);
            self.texto_centrado(etiqueta, 6.0, centro, base + 3.0, &self.fuente, TEXTO_TENUE);
        }
        self.y = base - 6.0;
    }

    /// Tarjetas de resumen por estado, con la pareja de colores del estado.
    fn tarjetas_estado(&mut self, conteos: &[(crate::expediente::models::Estado, usize)]) {
        if conteos.is_empty() {
            return;
        }
        let alto = 16.0;
        self.asegurar(alto + 4.0);
        let hueco = 4.0;
        let ancho = (ANCHO_UTIL - hueco * (conteos.len() as f32 - 1.0)) / conteos.len() as f32;
        let base = self.y - alto;

        for (i, (estado, cuenta)) in conteos.iter().enumerate() {
            let x = MARGEN_IZQ + i as f32 * (ancho + hueco);
            let principal = estado_color(*estado);
            self.rectangulo(x, base, ancho, alto, estado_bg_color(*estado));
            self.borde(x, base, ancho, alto, principal, 0.5);
            let centro = x + ancho / 2.0;
            let rotulo = estado_label(*estado).to_uppercase();
            self.texto_centrado(&rotulo, 6.0, centro, base + 11.0, &self.negrita, principal);
            self.texto_centrado(&cuenta.to_string(), 13.0, centro, base + 4.0, &self.negrita, principal);
        }
        self.y = base - 6.0;
    }

    /// Encabezado de sección con barra lateral dorada.
    fn seccion(&mut self, titulo: &str) {
        self.asegurar(10.0);
        let y = self.y - 6.0;
        self.rectangulo(MARGEN_IZQ, y, 1.5, 5.5, DORADO);
        self.texto(titulo, 12.0, MARGEN_IZQ + 4.0, y + 1.0, &self.negrita, MARRON_PRIMARIO);
        self.y = y - 4.0;
    }

    /// Banda de grupo coloreada según el estado.
    fn banda_grupo(&mut self, tinta: Rgb8, rotulo: &str) {
        self.asegurar(10.0);
        let y = self.y - 6.0;
        self.rectangulo(MARGEN_IZQ, y, 1.8, 6.0, tinta);
        self.texto(rotulo, 10.5, MARGEN_IZQ + 5.0, y + 1.5, &self.negrita, tinta);
        self.y = y - 3.0;
    }

    /// Cabecera de expediente del reporte de actuaciones: banda marrón con
    /// número y asunto, y franja inferior con cliente y estado.
    fn cabecera_expediente(
        &mut self,
        numero: &str,
        asunto: &str,
        cliente: &str,
        estado: crate::expediente::models::Estado,
        num_actuaciones: usize,
    ) {
        self.asegurar(34.0);
        let alto_banda = 13.0;
        let base = self.y - alto_banda;
        self.rectangulo(MARGEN_IZQ, base, ANCHO_UTIL, alto_banda, MARRON_PRIMARIO);
        self.texto(numero, 10.0, MARGEN_IZQ + 4.0, base + 7.0, &self.negrita, DORADO);
        self.texto(&truncate(asunto, 60), 8.0, MARGEN_IZQ + 4.0, base + 2.5, &self.fuente, BLANCO);
        let resumen = format!("{num_actuaciones} actuaciones");
        self.texto(
            &resumen,
            7.5,
            MARGEN_DER - 4.0 - ancho_texto(&resumen, 7.5),
            base + 5.0,
            &self.fuente,
            DORADO_CLARO,
        );

        let alto_franja = 7.0;
        let base_franja = base - alto_franja;
        self.rectangulo(MARGEN_IZQ, base_franja, ANCHO_UTIL, alto_franja, FONDO_SECUNDARIO);
        self.linea(MARGEN_IZQ, MARGEN_DER, base_franja, BORDE, 0.5);
        self.texto("Cliente: ", 7.5, MARGEN_IZQ + 4.0, base_franja + 2.3, &self.fuente, TEXTO_TENUE);
        self.texto(cliente, 7.5, MARGEN_IZQ + 16.0, base_franja + 2.3, &self.negrita, TEXTO);

        let tinta = estado_color(estado);
        let rotulo = estado_label(estado);
        let x_estado = MARGEN_DER - 6.0 - ancho_texto(rotulo, 7.5);
        self.rectangulo(x_estado - 3.0, base_franja + 1.5, 1.5, 4.0, tinta);
        self.texto(rotulo, 7.5, x_estado, base_franja + 2.3, &self.negrita, tinta);

        self.y = base_franja;
    }

    /// Fila de cabecera de tabla: banda marrón con rótulos dorados y filete
    /// inferior. Devuelve la Y en la que arranca la primera fila de datos.
    fn cabecera_tabla(&self, columnas: &[Columna], tope: f32) -> f32 {
        let alto_cabecera = 7.0;
        let y = tope - alto_cabecera;
        self.rectangulo(MARGEN_IZQ, y, ANCHO_UTIL, alto_cabecera, MARRON_PRIMARIO);
        self.rectangulo(MARGEN_IZQ, y - 0.7, ANCHO_UTIL, 0.7, DORADO);
        let mut x = MARGEN_IZQ;
        for columna in columnas {
            self.texto(columna.titulo, 7.0, x + 2.0, y + 2.3, &self.negrita, DORADO);
            x += columna.ancho;
        }
        y - 0.7
    }

    /// Tabla con fila de cabecera y rayado alterno. Las columnas deben sumar
    /// el ancho útil; cada fila ocupa una línea ya truncada por quien llama.
    /// En las tablas que cruzan de página la cabecera se repite al inicio de
    /// cada página de continuación.
    fn tabla(&mut self, columnas: &[Columna], filas: &[Vec<Celda>]) {
        let alto_cabecera = 7.0;
        let alto_fila = 6.5;

        self.asegurar(alto_cabecera + alto_fila);
        let mut tope = self.y;
        let mut y = self.cabecera_tabla(columnas, tope);

        for (indice, fila) in filas.iter().enumerate() {
            if y - alto_fila < Y_LIMITE {
                self.borde(MARGEN_IZQ, y, ANCHO_UTIL, tope - y, BORDE, 0.5);
                self.nueva_pagina();
                tope = self.y;
                y = self.cabecera_tabla(columnas, tope);
            }
            y -= alto_fila;
            let fondo = if indice % 2 == 0 { BLANCO } else { FONDO_SECUNDARIO };
            self.rectangulo(MARGEN_IZQ, y, ANCHO_UTIL, alto_fila, fondo);
            self.linea(MARGEN_IZQ, MARGEN_DER, y, BORDE, 0.3);

            let mut x = MARGEN_IZQ;
            for (celda, columna) in fila.iter().zip(columnas) {
                let fuente = if celda.negrita {
                    self.negrita.clone()
                } else {
                    self.fuente.clone()
                };
                if celda.centrada {
                    self.texto_centrado(&celda.texto, 7.5, x + columna.ancho / 2.0, y + 2.2, &fuente, celda.color);
                } else {
                    self.texto(&celda.texto, 7.5, x + 2.0, y + 2.2, &fuente, celda.color);
                }
                x += columna.ancho;
            }
        }

        self.borde(MARGEN_IZQ, y, ANCHO_UTIL, tope - y, BORDE, 0.5);
        self.y = y - 5.0;
    }

    /// Nota de cierre en prosa, con acento dorado lateral.
    fn nota(&mut self, texto: &str) {
        self.asegurar(14.0);
        let alto = 10.0;
        let base = self.y - alto;
        self.rectangulo(MARGEN_IZQ, base, ANCHO_UTIL, alto, FONDO_SECUNDARIO);
        self.borde(MARGEN_IZQ, base, ANCHO_UTIL, alto, BORDE, 0.5);
        self.rectangulo(MARGEN_IZQ + 2.0, base + 2.5, 1.0, 5.0, DORADO);
        self.texto(texto, 7.0, MARGEN_IZQ + 6.0, base + 4.0, &self.cursiva, TEXTO_TENUE);
        self.y = base - 6.0;
    }

    /// Dibuja el pie en todas las páginas (el total solo se conoce aquí)
    /// y serializa el documento.
    fn finalizar(self) -> Result<Vec<u8>, ReportError> {
        let total = self.paginas.len();
        let generado = format!("Generado: {}", Local::now().format("%d/%m/%Y %H:%M"));

        for (numero, (pagina, capa)) in self.paginas.iter().enumerate() {
            let capa = self.doc.get_page(*pagina).get_layer(*capa);

            capa.set_outline_color(color(BORDE));
            capa.set_outline_thickness(0.5);
            capa.add_line(Line {
                points: vec![
                    (Point::new(Mm(MARGEN_IZQ), Mm(18.0)), false),
                    (Point::new(Mm(MARGEN_DER), Mm(18.0)), false),
                ],
                is_closed: false,
            });

            capa.set_fill_color(color(TEXTO_TENUE));
            capa.use_text(
                "Despacho de Abogados - Documento confidencial",
                6.5,
                Mm(MARGEN_IZQ),
                Mm(13.5),
                &self.cursiva,
            );

            let paginacion = format!("Página {} de {}", numero + 1, total);
            capa.set_fill_color(color(TEXTO));
            capa.use_text(
                &paginacion,
                6.5,
                Mm(ANCHO_PAGINA / 2.0 - ancho_texto(&paginacion, 6.5) / 2.0),
                Mm(13.5),
                &self.negrita,
            );

            capa.set_fill_color(color(TEXTO_TENUE));
            capa.use_text(
                &generado,
                6.5,
                Mm(MARGEN_DER - ancho_texto(&generado, 6.5)),
                Mm(13.5),
                &self.fuente,
            );
        }

        let mut buffer = BufWriter::new(Vec::new());
        self.doc
            .save(&mut buffer)
            .map_err(|e| ReportError::Pdf(e.to_string()))?;
        buffer
            .into_inner()
            .map_err(|e| ReportError::Pdf(e.to_string()))
    }
}

/// Compone el informe del directorio de clientes.
pub fn componer_clientes(datos: &DirectorioClientes) -> Result<Vec<u8>, ReportError> {
    let mut c = Compositor::nuevo("Informe de Clientes")?;
    c.cabecera(
        "Informe de Clientes",
        &format!("Directorio completo - {} clientes registrados", datos.total_clientes),
    );

    c.tarjetas(&[
        ("TOTAL CLIENTES".to_string(), datos.total_clientes.to_string()),
        ("EXPEDIENTES".to_string(), datos.total_expedientes.to_string()),
        ("CIUDADES".to_string(), datos.ciudades_distintas.to_string()),
        (
            "MEDIA EXP/CLIENTE".to_string(),
            format_ratio(datos.total_expedientes, datos.total_clientes),
        ),
    ]);

    c.seccion("Directorio de Clientes");

    let columnas = [
        Columna { titulo: "#", ancho: 10.0 },
        Columna { titulo: "NOMBRE COMPLETO", ancho: 46.0 },
        Columna { titulo: "DNI / CIF", ancho: 24.0 },
        Columna { titulo: "TELÉFONO", ancho: 24.0 },
        Columna { titulo: "EMAIL", ancho: 40.0 },
        Columna { titulo: "CIUDAD", ancho: 22.0 },
        Columna { titulo: "EXP.", ancho: 14.0 },
    ];
    let filas: Vec<Vec<Celda>> = datos
        .clientes
        .iter()
        .enumerate()
        .map(|(i, cliente)| {
            let expedientes = if cliente.num_expedientes > 0 {
                Celda::destacada(cliente.num_expedientes.to_string(), DORADO_OSCURO).centrada()
            } else {
                Celda::normal("0").con_color(TEXTO_TENUE).centrada()
            };
            vec![
                Celda::normal((i + 1).to_string()).con_color(TEXTO_TENUE).centrada(),
                Celda::normal(truncate(
                    &format!("{} {}", cliente.nombre, cliente.apellidos),
                    34,
                )),
                Celda::normal(cliente.dni_cif.as_str()),
                Celda::normal(cliente.telefono.as_deref().unwrap_or("-")),
                Celda::normal(truncate(cliente.email.as_deref().unwrap_or("-"), 28))
                    .con_color(MARRON_SECUNDARIO),
                Celda::normal(cliente.ciudad.as_deref().unwrap_or("-")),
                expedientes,
            ]
        })
        .collect();
    c.tabla(&columnas, &filas);

    c.nota(&format!(
        "Este informe contiene {} clientes registrados con un total de {} expedientes asociados. Datos actualizados al {}.",
        datos.total_clientes,
        datos.total_expedientes,
        Local::now().format("%d/%m/%Y %H:%M"),
    ));

    c.finalizar()
}

/// Compone el informe de expedientes agrupados por estado.
pub fn componer_expedientes_por_estado(datos: &ExpedientesPorEstado) -> Result<Vec<u8>, ReportError> {
    let mut c = Compositor::nuevo("Expedientes por Estado")?;
    c.cabecera(
        "Expedientes por Estado",
        &format!(
            "Resumen ejecutivo - {} expedientes en {} estados",
            datos.total_expedientes,
            datos.grupos.len()
        ),
    );

    c.tarjetas_estado(&datos.conteos);

    let columnas = [
        Columna { titulo: "NÚMERO", ancho: 30.0 },
        Columna { titulo: "ASUNTO", ancho: 72.0 },
        Columna { titulo: "CLIENTE", ancho: 40.0 },
        Columna { titulo: "F. INICIO", ancho: 24.0 },
        Columna { titulo: "ACT.", ancho: 14.0 },
    ];

    for grupo in &datos.grupos {
        let tinta = estado_color(grupo.estado);
        c.banda_grupo(
            tinta,
            &format!(
                "{} ({} expedientes)",
                estado_label(grupo.estado),
                grupo.expedientes.len()
            ),
        );

        let filas: Vec<Vec<Celda>> = grupo
            .expedientes
            .iter()
            .map(|exp| {
                let actuaciones = if exp.num_actuaciones > 0 {
                    Celda::destacada(exp.num_actuaciones.to_string(), DORADO_OSCURO).centrada()
                } else {
                    Celda::normal("0").con_color(TEXTO_TENUE).centrada()
                };
                vec![
                    Celda::destacada(exp.numero_expediente.as_str(), DORADO_OSCURO),
                    Celda::normal(truncate(&exp.asunto, MAX_ASUNTO)),
                    Celda::normal(truncate(
                        &format!("{} {}", exp.cliente_nombre, exp.cliente_apellidos),
                        30,
                    )),
                    Celda::normal(exp.fecha_apertura.format("%d/%m/%Y").to_string()),
                    actuaciones,
                ]
            })
            .collect();
        c.tabla(&columnas, &filas);
    }

    c.nota(&format!(
        "Este informe muestra {} expedientes distribuidos en {} estados diferentes. Datos actualizados al {}.",
        datos.total_expedientes,
        datos.grupos.len(),
        Local::now().format("%d/%m/%Y %H:%M"),
    ));

    c.finalizar()
}

/// Compone el informe de actuaciones agrupadas por expediente.
pub fn componer_actuaciones(datos: &ActuacionesPorExpediente) -> Result<Vec<u8>, ReportError> {
    let mut c = Compositor::nuevo("Actuaciones por Expediente")?;
    c.cabecera(
        "Actuaciones por Expediente",
        &format!(
            "Registro de actividad - {} actuaciones en {} expedientes",
            datos.total_actuaciones,
            datos.expedientes.len()
        ),
    );

    c.tarjetas(&[
        ("EXPEDIENTES ACTIVOS".to_string(), datos.expedientes.len().to_string()),
        ("TOTAL ACTUACIONES".to_string(), datos.total_actuaciones.to_string()),
        ("TIPOS DE ACTUACIÓN".to_string(), datos.tipos_distintos.to_string()),
        (
            "MEDIA ACT/EXP".to_string(),
            format_ratio(datos.total_actuaciones as i64, datos.expedientes.len()),
        ),
    ]);

    let columnas = [
        Columna { titulo: "#", ancho: 10.0 },
        Columna { titulo: "FECHA", ancho: 26.0 },
        Columna { titulo: "TIPO", ancho: 34.0 },
        Columna { titulo: "DESCRIPCIÓN", ancho: 110.0 },
    ];

    for grupo in &datos.expedientes {
        let exp = &grupo.expediente;
        c.cabecera_expediente(
            &exp.numero_expediente,
            &exp.asunto,
            &format!("{} {}", exp.cliente_nombre, exp.cliente_apellidos),
            exp.estado,
            grupo.actuaciones.len(),
        );

        let filas: Vec<Vec<Celda>> = grupo
            .actuaciones
            .iter()
            .enumerate()
            .map(|(i, actuacion)| {
                vec![
                    Celda::normal((i + 1).to_string()).con_color(TEXTO_TENUE).centrada(),
                    Celda::normal(actuacion.fecha_actuacion.format("%d/%m/%Y").to_string()),
                    Celda::destacada(actuacion.tipo_actuacion.as_str(), MARRON_SECUNDARIO),
                    Celda::normal(truncate(&actuacion.descripcion, MAX_DESCRIPCION)),
                ]
            })
            .collect();
        c.tabla(&columnas, &filas);
    }

    c.nota(&format!(
        "Este informe detalla {} actuaciones distribuidas en {} expedientes activos. Datos actualizados al {}.",
        datos.total_actuaciones,
        datos.expedientes.len(),
        Local::now().format("%d/%m/%Y %H:%M"),
    ));

    c.finalizar()
}
