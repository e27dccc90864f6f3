use chrono::NaiveDate;
use sqlx::SqliteExecutor;

use crate::models::{Article, CreateArticle};

/// Columns returned by every article query, in `ArticleRow` order
const ARTICLE_COLUMNS: &str = "id, nombre, fecha_retiro, unidades, codigo_sap";

/// Persistence for the `articulos` table
///
/// Every method issues exactly one statement, so each call commits on its
/// own. The executor is either the pool or a connection owned by the
/// current request.
pub struct ArticleRepository;

impl ArticleRepository {
    /// Insert a new article and return it with its assigned id
    pub async fn create<'e, E>(executor: E, data: &CreateArticle) -> Result<Article, sqlx::Error>
    where
        E: SqliteExecutor<'e>,
    {
        let query = format!(
            r#"
            INSERT INTO articulos (nombre, fecha_retiro, unidades, codigo_sap)
            VALUES ($1, $2, $3, $4)
            RETURNING {}
            "#,
            ARTICLE_COLUMNS
        );
        let row = sqlx::query_as::<_, ArticleRow>(&query)
            .bind(&data.name)
            .bind(data.retirement_date)
            .bind(data.units)
            .bind(&data.sap_code)
            .fetch_one(executor)
            .await?;

        Ok(row.into())
    }

    /// Get all articles
    pub async fn get_all<'e, E>(executor: E) -> Result<Vec<Article>, sqlx::Error>
    where
        E: SqliteExecutor<'e>,
    {
        let query = format!("SELECT {} FROM articulos ORDER BY id", ARTICLE_COLUMNS);
        let rows = sqlx::query_as::<_, ArticleRow>(&query)
            .fetch_all(executor)
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Get an article by ID
    pub async fn get_by_id<'e, E>(executor: E, id: i64) -> Result<Option<Article>, sqlx::Error>
    where
        E: SqliteExecutor<'e>,
    {
        let query = format!("SELECT {} FROM articulos WHERE id = $1", ARTICLE_COLUMNS);
        let row = sqlx::query_as::<_, ArticleRow>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await?;

        Ok(row.map(Into::into))
    }

    /// Overwrite every field of an existing article
    ///
    /// Returns `None` when no article has this id; nothing is inserted in
    /// that case.
    pub async fn update<'e, E>(
        executor: E,
        id: i64,
        data: &CreateArticle,
    ) -> Result<Option<Article>, sqlx::Error>
    where
        E: SqliteExecutor<'e>,
    {
        let query = format!(
            r#"
            UPDATE articulos SET
                nombre = $1,
                fecha_retiro = $2,
                unidades = $3,
                codigo_sap = $4
            WHERE id = $5
            RETURNING {}
            "#,
            ARTICLE_COLUMNS
        );
        let row = sqlx::query_as::<_, ArticleRow>(&query)
            .bind(&data.name)
            .bind(data.retirement_date)
            .bind(data.units)
            .bind(&data.sap_code)
            .bind(id)
            .fetch_optional(executor)
            .await?;

        Ok(row.map(Into::into))
    }

    /// Delete an article by ID, returning whether a row was removed
    pub async fn delete<'e, E>(executor: E, id: i64) -> Result<bool, sqlx::Error>
    where
        E: SqliteExecutor<'e>,
    {
        let result = sqlx::query("DELETE FROM articulos WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

/// Internal row type; column names are the ones the table was created with
#[derive(Debug, sqlx::FromRow)]
struct ArticleRow {
    id: i64,
    nombre: String,
    fecha_retiro: NaiveDate,
    unidades: i64,
    codigo_sap: String,
}

impl From<ArticleRow> for Article {
    fn from(row: ArticleRow) -> Self {
        Self {
            id: row.id,
            name: row.nombre,
            retirement_date: row.fecha_retiro,
            units: row.unidades,
            sap_code: row.codigo_sap,
        }
    }
}
