//! Consultas de documentos.
//!
//! `insert_documento` es la única escritura que realiza el pipeline de
//! reportes: registra el artefacto generado como un Documento sin
//! expediente asociado.

use super::AppState;
use crate::documento::models::{CreateDocumentoRequest, Documento};

const COLUMNAS: &str = "id, expediente_id, nombre_archivo, descripcion, tipo_documento, ruta_archivo, tamano_bytes, extension, fecha_carga, cargado_por, fecha_modificacion, observaciones";

impl AppState {
    pub async fn get_all_documentos(&self) -> Result<Vec<Documento>, sqlx::Error> {
        sqlx::query_as::<_, Documento>(&format!(
            "SELECT {COLUMNAS} FROM documentos ORDER BY fecha_carga DESC"
        ))
        .fetch_all(&self.pool)
        .await
    }

    pub async fn get_documento_by_id(&self, id: i32) -> Result<Option<Documento>, sqlx::Error> {
        sqlx::query_as::<_, Documento>(&format!(
            "SELECT {COLUMNAS} FROM documentos WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn get_documentos_by_expediente(
        &self,
        expediente_id: i32,
    ) -> Result<Vec<Documento>, sqlx::Error> {
        sqlx::query_as::<_, Documento>(&format!(
            "SELECT {COLUMNAS} FROM documentos WHERE expediente_id = $1 ORDER BY fecha_carga DESC"
        ))
        .bind(expediente_id)
        .fetch_all(&self.pool)
        .await
    }

    /// Inserta un registro de documento y lo devuelve con su id asignado.
    /// Un `expediente_id` vacío o no positivo se normaliza a NULL.
    pub async fn insert_documento(
        &self,
        registro: &CreateDocumentoRequest,
    ) -> Result<Documento, sqlx::Error> {
        let expediente_id = registro.expediente_id.filter(|id| *id > 0);
        sqlx::query_as::<_, Documento>(&format!(
            r#"
            INSERT INTO documentos (expediente_id, nombre_archivo, descripcion, tipo_documento, ruta_archivo, tamano_bytes, extension, fecha_carga, cargado_por, observaciones)
            VALUES ($1, $2, $3, $4, $5, $6, $7, NOW(), $8, $9)
            RETURNING {COLUMNAS}
            "#
        ))
        .bind(expediente_id)
        .bind(&registro.nombre_archivo)
        .bind(&registro.descripcion)
        .bind(&registro.tipo_documento)
        .bind(&registro.ruta_archivo)
        .bind(registro.tamano_bytes)
        .bind(&registro.extension)
        .bind(&registro.cargado_por)
        .bind(&registro.observaciones)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn update_documento(&self, documento: &Documento) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            UPDATE documentos
            SET nombre_archivo = $1, descripcion = $2, tipo_documento = $3, observaciones = $4,
                fecha_modificacion = $5
            WHERE id = $6
            "#,
        )
        .bind(&documento.nombre_archivo)
        .bind(&documento.descripcion)
        .bind(&documento.tipo_documento)
        .bind(&documento.observaciones)
        .bind(documento.fecha_modificacion)
        .bind(documento.id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn delete_documento(&self, id: i32) -> Result<bool, sqlx::Error> {
        let resultado = sqlx::query("DELETE FROM documentos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(resultado.rows_affected() > 0)
    }

    /// Documentos de un tipo dado, sin distinguir mayúsculas, del más
    /// reciente al más antiguo.
    pub async fn get_documentos_by_tipo(&self, tipo: &str) -> Result<Vec<Documento>, sqlx::Error> {
        sqlx::query_as::<_, Documento>(&format!(
            "SELECT {COLUMNAS} FROM documentos WHERE LOWER(tipo_documento) = LOWER($1) ORDER BY fecha_carga DESC"
        ))
        .bind(tipo)
        .fetch_all(&self.pool)
        .await
    }
}
