//! Consultas de citas.

use chrono::NaiveDateTime;

use super::AppState;
use crate::cita::models::Cita;

const COLUMNAS: &str = "id, expediente_id, titulo, descripcion, fecha_inicio, fecha_fin, lugar, tipo_cita, participantes, completada, observaciones, fecha_creacion, fecha_modificacion";

impl AppState {
    pub async fn get_all_citas(&self) -> Result<Vec<Cita>, sqlx::Error> {
        sqlx::query_as::<_, Cita>(&format!(
            "SELECT {COLUMNAS} FROM citas ORDER BY fecha_inicio"
        ))
        .fetch_all(&self.pool)
        .await
    }

    pub async fn get_cita_by_id(&self, id: i32) -> Result<Option<Cita>, sqlx::Error> {
        sqlx::query_as::<_, Cita>(&format!("SELECT {COLUMNAS} FROM citas WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn get_citas_by_expediente(
        &self,
        expediente_id: i32,
    ) -> Result<Vec<Cita>, sqlx::Error> {
        sqlx::query_as::<_, Cita>(&format!(
            "SELECT {COLUMNAS} FROM citas WHERE expediente_id = $1 ORDER BY fecha_inicio"
        ))
        .bind(expediente_id)
        .fetch_all(&self.pool)
        .await
    }

    pub async fn insert_cita(&self, cita: &Cita) -> Result<Cita, sqlx::Error> {
        sqlx::query_as::<_, Cita>(&format!(
            r#"
            INSERT INTO citas (expediente_id, titulo, descripcion, fecha_inicio, fecha_fin, lugar, tipo_cita, participantes, completada, observaciones, fecha_creacion)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING {COLUMNAS}
            "#
        ))
        .bind(cita.expediente_id)
        .bind(&cita.titulo)
        .bind(&cita.descripcion)
        .bind(cita.fecha_inicio)
        .bind(cita.fecha_fin)
        .bind(&cita.lugar)
        .bind(&cita.tipo_cita)
        .bind(&cita.participantes)
        .bind(cita.completada)
        .bind(&cita.observaciones)
        .bind(cita.fecha_creacion)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn update_cita(&self, cita: &Cita) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            UPDATE citas
            SET titulo = $1, descripcion = $2, fecha_inicio = $3, fecha_fin = $4, lugar = $5,
                tipo_cita = $6, participantes = $7, completada = $8, observaciones = $9,
                fecha_modificacion = $10
            WHERE id = $11
            "#,
        )
        .bind(&cita.titulo)
        .bind(&cita.descripcion)
        .bind(cita.fecha_inicio)
        .bind(cita.fecha_fin)
        .bind(&cita.lugar)
        .bind(&cita.tipo_cita)
        .bind(&cita.participantes)
        .bind(cita.completada)
        .bind(&cita.observaciones)
        .bind(cita.fecha_modificacion)
        .bind(cita.id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn delete_cita(&self, id: i32) -> Result<bool, sqlx::Error> {
        let resultado = sqlx::query("DELETE FROM citas WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(resultado.rows_affected() > 0)
    }

    /// Citas cuyo inicio cae dentro del rango, ambos extremos incluidos,
    /// en orden cronológico.
    pub async fn get_citas_by_rango_fechas(
        &self,
        fecha_inicio: NaiveDateTime,
        fecha_fin: NaiveDateTime,
    ) -> Result<Vec<Cita>, sqlx::Error> {
        sqlx::query_as::<_, Cita>(&format!(
            "SELECT {COLUMNAS} FROM citas WHERE fecha_inicio BETWEEN $1 AND $2 ORDER BY fecha_inicio"
        ))
        .bind(fecha_inicio)
        .bind(fecha_fin)
        .fetch_all(&self.pool)
        .await
    }

    /// Citas no completadas cuyo inicio no ha pasado todavía respecto al
    /// instante dado, en orden cronológico.
    pub async fn get_citas_pendientes(
        &self,
        desde: NaiveDateTime,
    ) -> Result<Vec<Cita>, sqlx::Error> {
        sqlx::query_as::<_, Cita>(&format!(
            "SELECT {COLUMNAS} FROM citas WHERE NOT completada AND fecha_inicio >= $1 ORDER BY fecha_inicio"
        ))
        .bind(desde)
        .fetch_all(&self.pool)
        .await
    }
}
