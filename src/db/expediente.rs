//! Consultas de expedientes.

use super::AppState;
use crate::expediente::models::{Estado, Expediente, ExpedienteResumen};
use crate::reportes::actuaciones_por_expediente::ExpedienteActividadRow;
use crate::reportes::expedientes_por_estado::ExpedienteEstadoRow;

const COLUMNAS: &str = "id, numero_expediente, asunto, descripcion, tipo_expediente, estado, cliente_id, juzgado_tribunal, numero_procedimiento, fecha_apertura, fecha_cierre, fecha_modificacion, observaciones";

impl AppState {
    pub async fn get_all_expedientes(&self) -> Result<Vec<Expediente>, sqlx::Error> {
        sqlx::query_as::<_, Expediente>(&format!(
            "SELECT {COLUMNAS} FROM expedientes ORDER BY fecha_apertura DESC"
        ))
        .fetch_all(&self.pool)
        .await
    }

    pub async fn get_expediente_by_id(&self, id: i32) -> Result<Option<Expediente>, sqlx::Error> {
        sqlx::query_as::<_, Expediente>(&format!(
            "SELECT {COLUMNAS} FROM expedientes WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn get_expedientes_by_cliente(
        &self,
        cliente_id: i32,
    ) -> Result<Vec<Expediente>, sqlx::Error> {
        sqlx::query_as::<_, Expediente>(&format!(
            "SELECT {COLUMNAS} FROM expedientes WHERE cliente_id = $1 ORDER BY fecha_apertura DESC"
        ))
        .bind(cliente_id)
        .fetch_all(&self.pool)
        .await
    }

    pub async fn get_expedientes_by_estado(
        &self,
        estado: Estado,
    ) -> Result<Vec<Expediente>, sqlx::Error> {
        sqlx::query_as::<_, Expediente>(&format!(
            "SELECT {COLUMNAS} FROM expedientes WHERE estado = $1 ORDER BY fecha_apertura DESC"
        ))
        .bind(estado)
        .fetch_all(&self.pool)
        .await
    }

    pub async fn insert_expediente(
        &self,
        expediente: &Expediente,
    ) -> Result<Expediente, sqlx::Error> {
        sqlx::query_as::<_, Expediente>(&format!(
            r#"
            INSERT INTO expedientes (numero_expediente, asunto, descripcion, tipo_expediente, estado, cliente_id, juzgado_tribunal, numero_procedimiento, fecha_apertura, observaciones)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {COLUMNAS}
            "#
        ))
        .bind(&expediente.numero_expediente)
        .bind(&expediente.asunto)
        .bind(&expediente.descripcion)
        .bind(&expediente.tipo_expediente)
        .bind(expediente.estado)
        .bind(expediente.cliente_id)
        .bind(&expediente.juzgado_tribunal)
        .bind(&expediente.numero_procedimiento)
        .bind(expediente.fecha_apertura)
        .bind(&expediente.observaciones)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn update_expediente(&self, expediente: &Expediente) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            UPDATE expedientes
            SET numero_expediente = $1, asunto = $2, descripcion = $3, tipo_expediente = $4,
                estado = $5, juzgado_tribunal = $6, numero_procedimiento = $7,
                fecha_cierre = $8, fecha_modificacion = $9, observaciones = $10
            WHERE id = $11
            "#,
        )
        .bind(&expediente.numero_expediente)
        .bind(&expediente.asunto)
        .bind(&expediente.descripcion)
        .bind(&expediente.tipo_expediente)
        .bind(expediente.estado)
        .bind(&expediente.juzgado_tribunal)
        .bind(&expediente.numero_procedimiento)
        .bind(expediente.fecha_cierre)
        .bind(expediente.fecha_modificacion)
        .bind(&expediente.observaciones)
        .bind(expediente.id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn delete_expediente(&self, id: i32) -> Result<bool, sqlx::Error> {
        let resultado = sqlx::query("DELETE FROM expedientes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(resultado.rows_affected() > 0)
    }

    /// Búsqueda por subcadena, sin distinguir mayúsculas, sobre número,
    /// asunto, tipo y número de procedimiento. Un término en blanco lista todo.
    pub async fn search_expedientes(&self, q: &str) -> Result<Vec<Expediente>, sqlx::Error> {
        let q = q.trim();
        if q.is_empty() {
            return self.get_all_expedientes().await;
        }
        sqlx::query_as::<_, Expediente>(&format!(
            r#"
            SELECT {COLUMNAS} FROM expedientes
            WHERE numero_expediente ILIKE $1 OR asunto ILIKE $1
               OR tipo_expediente ILIKE $1 OR numero_procedimiento ILIKE $1
            ORDER BY fecha_apertura DESC
            "#
        ))
        .bind(format!("%{q}%"))
        .fetch_all(&self.pool)
        .await
    }

    /// Vista resumida de todos los expedientes con el nombre del cliente ya
    /// resuelto en la consulta.
    pub async fn get_expedientes_resumen(&self) -> Result<Vec<ExpedienteResumen>, sqlx::Error> {
        sqlx::query_as::<_, ExpedienteResumen>(
            r#"
            SELECT e.id, e.numero_expediente, e.asunto, e.tipo_expediente, e.estado,
                   c.nombre || ' ' || c.apellidos AS cliente_nombre,
                   e.fecha_apertura
            FROM expedientes e
            JOIN clientes c ON c.id = e.cliente_id
            ORDER BY e.fecha_apertura DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    /// Filas del reporte de expedientes por estado, con cliente y conteo de
    /// actuaciones materializados en una sola consulta.
    pub async fn get_expedientes_reporte(&self) -> Result<Vec<ExpedienteEstadoRow>, sqlx::Error> {
        sqlx::query_as::<_, ExpedienteEstadoRow>(
            r#"
            SELECT e.id, e.numero_expediente, e.asunto, e.estado, e.fecha_apertura,
                   c.nombre AS cliente_nombre, c.apellidos AS cliente_apellidos,
                   COUNT(a.id) AS num_actuaciones
            FROM expedientes e
            JOIN clientes c ON c.id = e.cliente_id
            LEFT JOIN actuaciones a ON a.expediente_id = e.id
            GROUP BY e.id, c.nombre, c.apellidos
            ORDER BY e.id
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    /// Expedientes con al menos una actuación, para el reporte de actividad.
    pub async fn get_expedientes_con_actividad(
        &self,
    ) -> Result<Vec<ExpedienteActividadRow>, sqlx::Error> {
        sqlx::query_as::<_, ExpedienteActividadRow>(
            r#"
            SELECT e.id, e.numero_expediente, e.asunto, e.estado,
                   c.nombre AS cliente_nombre, c.apellidos AS cliente_apellidos
            FROM expedientes e
            JOIN clientes c ON c.id = e.cliente_id
            WHERE EXISTS (SELECT 1 FROM actuaciones a WHERE a.expediente_id = e.id)
            ORDER BY e.id
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }
}
