//! Consultas de actuaciones.

use chrono::NaiveDateTime;

use super::AppState;
use crate::actuacion::models::Actuacion;
use crate::reportes::actuaciones_por_expediente::ActuacionReporteRow;

const COLUMNAS: &str = "id, expediente_id, fecha_actuacion, tipo_actuacion, descripcion, resultado, responsable, observaciones, fecha_registro, fecha_modificacion";

impl AppState {
    pub async fn get_all_actuaciones(&self) -> Result<Vec<Actuacion>, sqlx::Error> {
        sqlx::query_as::<_, Actuacion>(&format!(
            "SELECT {COLUMNAS} FROM actuaciones ORDER BY fecha_actuacion DESC"
        ))
        .fetch_all(&self.pool)
        .await
    }

    pub async fn get_actuacion_by_id(&self, id: i32) -> Result<Option<Actuacion>, sqlx::Error> {
        sqlx::query_as::<_, Actuacion>(&format!(
            "SELECT {COLUMNAS} FROM actuaciones WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn get_actuaciones_by_expediente(
        &self,
        expediente_id: i32,
    ) -> Result<Vec<Actuacion>, sqlx::Error> {
        sqlx::query_as::<_, Actuacion>(&format!(
            "SELECT {COLUMNAS} FROM actuaciones WHERE expediente_id = $1 ORDER BY fecha_actuacion DESC"
        ))
        .bind(expediente_id)
        .fetch_all(&self.pool)
        .await
    }

    pub async fn insert_actuacion(&self, actuacion: &Actuacion) -> Result<Actuacion, sqlx::Error> {
        sqlx::query_as::<_, Actuacion>(&format!(
            r#"
            INSERT INTO actuaciones (expediente_id, fecha_actuacion, tipo_actuacion, descripcion, resultado, responsable, observaciones, fecha_registro)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {COLUMNAS}
            "#
        ))
        .bind(actuacion.expediente_id)
        .bind(actuacion.fecha_actuacion)
        .bind(&actuacion.tipo_actuacion)
        .bind(&actuacion.descripcion)
        .bind(&actuacion.resultado)
        .bind(&actuacion.responsable)
        .bind(&actuacion.observaciones)
        .bind(actuacion.fecha_registro)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn update_actuacion(&self, actuacion: &Actuacion) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            UPDATE actuaciones
            SET fecha_actuacion = $1, tipo_actuacion = $2, descripcion = $3, resultado = $4,
                responsable = $5, observaciones = $6, fecha_modificacion = $7
            WHERE id = $8
            "#,
        )
        .bind(actuacion.fecha_actuacion)
        .bind(&actuacion.tipo_actuacion)
        .bind(&actuacion.descripcion)
        .bind(&actuacion.resultado)
        .bind(&actuacion.responsable)
        .bind(&actuacion.observaciones)
        .bind(actuacion.fecha_modificacion)
        .bind(actuacion.id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn delete_actuacion(&self, id: i32) -> Result<bool, sqlx::Error> {
        let resultado = sqlx::query("DELETE FROM actuaciones WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(resultado.rows_affected() > 0)
    }

    /// Actuaciones con fecha dentro del rango, ambos extremos incluidos,
    /// de la más reciente a la más antigua.
    pub async fn get_actuaciones_by_rango_fechas(
        &self,
        fecha_inicio: NaiveDateTime,
        fecha_fin: NaiveDateTime,
    ) -> Result<Vec<Actuacion>, sqlx::Error> {
        sqlx::query_as::<_, Actuacion>(&format!(
            "SELECT {COLUMNAS} FROM actuaciones WHERE fecha_actuacion BETWEEN $1 AND $2 ORDER BY fecha_actuacion DESC"
        ))
        .bind(fecha_inicio)
        .bind(fecha_fin)
        .fetch_all(&self.pool)
        .await
    }

    /// Actuaciones reducidas a los campos del reporte de actividad. Solo las
    /// de expedientes con actividad; el agregador las agrupa en memoria.
    pub async fn get_actuaciones_reporte(&self) -> Result<Vec<ActuacionReporteRow>, sqlx::Error> {
        sqlx::query_as::<_, ActuacionReporteRow>(
            r#"
            SELECT id, expediente_id, fecha_actuacion, tipo_actuacion, descripcion
            FROM actuaciones
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }
}
