//! Query builder estilo PostgREST
//!
//! Construye consultas sobre una tabla del backend hosteado con la misma
//! superficie que usan las páginas: select, filtros eq/gte, orden y límite,
//! ejecutadas como fetch tipado, insert, update o delete.

use reqwest::header::HeaderValue;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::clients::supabase::{api_error, SupabaseConnection, SupabaseError};

/// Consulta en construcción sobre una tabla
pub struct TableQuery {
    connection: Option<SupabaseConnection>,
    table: String,
    select: Option<String>,
    filters: Vec<(String, String)>,
    order: Option<String>,
    limit: Option<usize>,
}

impl TableQuery {
    pub(crate) fn new(connection: Option<SupabaseConnection>, table: &str) -> Self {
        Self {
            connection,
            table: table.to_string(),
            select: None,
            filters: Vec::new(),
            order: None,
            limit: None,
        }
    }

    /// Columnas a seleccionar (por defecto `*`)
    pub fn select(mut self, columns: &str) -> Self {
        self.select = Some(columns.to_string());
        self
    }

    /// Filtro de igualdad: `column=eq.value`
    pub fn eq(mut self, column: &str, value: &str) -> Self {
        self.filters
            .push((column.to_string(), format!("eq.{}", urlencoding::encode(value))));
        self
    }

    /// Filtro mayor-o-igual: `column=gte.value`
    pub fn gte(mut self, column: &str, value: &str) -> Self {
        self.filters
            .push((column.to_string(), format!("gte.{}", urlencoding::encode(value))));
        self
    }

    /// Orden por columna, ascendente o descendente
    pub fn order(mut self, column: &str, ascending: bool) -> Self {
        let direction = if ascending { "asc" } else { "desc" };
        self.order = Some(format!("{}.{}", column, direction));
        self
    }

    /// Límite de filas devueltas
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Query string PostgREST resultante (sin la URL base)
    pub fn query_string(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        parts.push(format!("select={}", self.select.as_deref().unwrap_or("*")));
        for (column, predicate) in &self.filters {
            parts.push(format!("{}={}", column, predicate));
        }
        if let Some(order) = &self.order {
            parts.push(format!("order={}", order));
        }
        if let Some(limit) = self.limit {
            parts.push(format!("limit={}", limit));
        }
        parts.join("&")
    }

    fn endpoint(&self, conn: &SupabaseConnection) -> String {
        format!("{}/rest/v1/{}?{}", conn.base_url, self.table, self.query_string())
    }

    fn connection(&self) -> Result<SupabaseConnection, SupabaseError> {
        self.connection.clone().ok_or(SupabaseError::NotInitialized)
    }

    /// Ejecutar como SELECT y deserializar las filas
    pub async fn fetch<T: DeserializeOwned>(self) -> Result<Vec<T>, SupabaseError> {
        let conn = self.connection()?;
        let url = self.endpoint(&conn);

        let response = conn.http.get(&url).headers(conn.auth_headers()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(api_error(status.as_u16(), response.text().await.unwrap_or_default()));
        }

        Ok(response.json::<Vec<T>>().await?)
    }

    /// Insertar filas (no devuelve representación; las páginas refrescan)
    pub async fn insert<T: Serialize>(self, rows: &[T]) -> Result<(), SupabaseError> {
        let conn = self.connection()?;
        let url = format!("{}/rest/v1/{}", conn.base_url, self.table);

        let mut headers = conn.auth_headers();
        headers.insert("Prefer", HeaderValue::from_static("return=minimal"));

        let response = conn.http.post(&url).headers(headers).json(rows).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(api_error(status.as_u16(), response.text().await.unwrap_or_default()));
        }
        Ok(())
    }

    /// Actualizar las filas que cumplan los filtros acumulados
    pub async fn update<T: Serialize>(self, patch: &T) -> Result<(), SupabaseError> {
        let conn = self.connection()?;
        let url = self.endpoint(&conn);

        let mut headers = conn.auth_headers();
        headers.insert("Prefer", HeaderValue::from_static("return=minimal"));

        let response = conn.http.patch(&url).headers(headers).json(patch).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(api_error(status.as_u16(), response.text().await.unwrap_or_default()));
        }
        Ok(())
    }

    /// Borrar las filas que cumplan los filtros acumulados
    pub async fn delete(self) -> Result<(), SupabaseError> {
        let conn = self.connection()?;
        let url = self.endpoint(&conn);

        let response = conn.http.delete(&url).headers(conn.auth_headers()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(api_error(status.as_u16(), response.text().await.unwrap_or_default()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::supabase::SupabaseClient;

    fn query(table: &str) -> TableQuery {
        SupabaseClient::uninitialized().from(table)
    }

    #[test]
    fn test_default_select() {
        assert_eq!(query("vehicles").query_string(), "select=*");
    }

    #[test]
    fn test_filters_and_order() {
        let q = query("maintenance")
            .select("vehicle,date,service")
            .gte("date", "2026-08-07")
            .order("date", true);
        assert_eq!(
            q.query_string(),
            "select=vehicle,date,service&date=gte.2026-08-07&order=date.asc"
        );
    }

    #[test]
    fn test_eq_encodes_values() {
        let q = query("vehicles").eq("plate", "CA 123");
        assert_eq!(q.query_string(), "select=*&plate=eq.CA%20123");
    }

    #[test]
    fn test_order_desc_and_limit() {
        let q = query("trips").order("date", false).limit(3);
        assert_eq!(q.query_string(), "select=*&order=date.desc&limit=3");
    }

    #[tokio::test]
    async fn test_unconfigured_fetch_fails() {
        let result = query("vehicles").fetch::<serde_json::Value>().await;
        assert!(matches!(result.unwrap_err(), SupabaseError::NotInitialized));
    }
}
