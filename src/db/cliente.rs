//! Consultas de clientes.

use super::AppState;
use crate::cliente::models::Cliente;
use crate::reportes::clientes::ClienteDirectorioRow;

const COLUMNAS: &str = "id, nombre, apellidos, dni_cif, telefono, email, direccion, ciudad, codigo_postal, observaciones, fecha_alta, fecha_modificacion";

impl AppState {
    pub async fn get_all_clientes(&self) -> Result<Vec<Cliente>, sqlx::Error> {
        sqlx::query_as::<_, Cliente>(&format!(
            "SELECT {COLUMNAS} FROM clientes ORDER BY apellidos, nombre"
        ))
        .fetch_all(&self.pool)
        .await
    }

    pub async fn get_cliente_by_id(&self, id: i32) -> Result<Option<Cliente>, sqlx::Error> {
        sqlx::query_as::<_, Cliente>(&format!("SELECT {COLUMNAS} FROM clientes WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn insert_cliente(&self, cliente: &Cliente) -> Result<Cliente, sqlx::Error> {
        sqlx::query_as::<_, Cliente>(&format!(
            r#"
            INSERT INTO clientes (nombre, apellidos, dni_cif, telefono, email, direccion, ciudad, codigo_postal, observaciones, fecha_alta)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {COLUMNAS}
            "#
        ))
        .bind(&cliente.nombre)
        .bind(&cliente.apellidos)
        .bind(&cliente.dni_cif)
        .bind(&cliente.telefono)
        .bind(&cliente.email)
        .bind(&cliente.direccion)
        .bind(&cliente.ciudad)
        .bind(&cliente.codigo_postal)
        .bind(&cliente.observaciones)
        .bind(cliente.fecha_alta)
        .fetch_one(&self.pool)
        .await
    }

    pub async fn update_cliente(&self, cliente: &Cliente) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            UPDATE clientes
            SET nombre = $1, apellidos = $2, dni_cif = $3, telefono = $4, email = $5,
                direccion = $6, ciudad = $7, codigo_postal = $8, observaciones = $9,
                fecha_modificacion = $10
            WHERE id = $11
            "#,
        )
        .bind(&cliente.nombre)
        .bind(&cliente.apellidos)
        .bind(&cliente.dni_cif)
        .bind(&cliente.telefono)
        .bind(&cliente.email)
        .bind(&cliente.direccion)
        .bind(&cliente.ciudad)
        .bind(&cliente.codigo_postal)
        .bind(&cliente.observaciones)
        .bind(cliente.fecha_modificacion)
        .bind(cliente.id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn delete_cliente(&self, id: i32) -> Result<bool, sqlx::Error> {
        let resultado = sqlx::query("DELETE FROM clientes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(resultado.rows_affected() > 0)
    }

    /// Búsqueda por subcadena, sin distinguir mayúsculas, sobre nombre,
    /// apellidos, DNI/CIF y email. Un término en blanco lista todo.
    pub async fn search_clientes(&self, q: &str) -> Result<Vec<Cliente>, sqlx::Error> {
        let q = q.trim();
        if q.is_empty() {
            return self.get_all_clientes().await;
        }
        sqlx::query_as::<_, Cliente>(&format!(
            r#"
            SELECT {COLUMNAS} FROM clientes
            WHERE nombre ILIKE $1 OR apellidos ILIKE $1 OR dni_cif ILIKE $1 OR email ILIKE $1
            ORDER BY apellidos, nombre
            "#
        ))
        .bind(format!("%{q}%"))
        .fetch_all(&self.pool)
        .await
    }

    /// Filas del directorio para el reporte de clientes, con el conteo de
    /// expedientes ya materializado. Orden de recuperación: id ascendente;
    /// el agregador aplica el orden final.
    pub async fn get_clientes_directorio(&self) -> Result<Vec<ClienteDirectorioRow>, sqlx::Error> {
        sqlx::query_as::<_, ClienteDirectorioRow>(
            r#"
            SELECT c.id, c.nombre, c.apellidos, c.dni_cif, c.telefono, c.email, c.ciudad,
                   COUNT(e.id) AS num_expedientes
            FROM clientes c
            LEFT JOIN expedientes e ON e.cliente_id = c.id
            GROUP BY c.id
            ORDER BY c.id
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }
}
