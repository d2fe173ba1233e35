use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::dto::fighter::{FighterFilter, FighterSummary};
use crate::error::{Result, StorageError};
use crate::models::Fighter;

const FIGHTER_COLUMNS: &str = r#"
    id, name, nickname, weight_class, nationality,
    COALESCE(wins, 0) AS wins,
    COALESCE(losses, 0) AS losses,
    COALESCE(draws, 0) AS draws,
    COALESCE(no_contests, 0) AS no_contests,
    COALESCE(ko_wins, 0) AS ko_wins,
    COALESCE(sub_wins, 0) AS sub_wins,
    COALESCE(dec_wins, 0) AS dec_wins,
    COALESCE(loss_by_ko, 0) AS loss_by_ko,
    COALESCE(loss_by_sub, 0) AS loss_by_sub,
    rank, status, age, height, weight, fighting_out_of, ufc_url
"#;

const SUMMARY_COLUMNS: &str = r#"
    id, name, weight_class, nationality,
    COALESCE(wins, 0) AS wins,
    COALESCE(losses, 0) AS losses,
    COALESCE(draws, 0) AS draws,
    COALESCE(no_contests, 0) AS no_contests,
    rank, status
"#;

pub struct FighterRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> FighterRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// One page of the fighter directory plus the total number of matches.
    pub async fn list(&self, filter: &FighterFilter) -> Result<(Vec<FighterSummary>, i64)> {
        let total_items = self.count(filter).await?;

        let mut query = QueryBuilder::<Postgres>::new("SELECT ");
        query.push(SUMMARY_COLUMNS);
        query.push(" FROM fighters WHERE 1=1");
        push_fighter_filters(&mut query, filter);
        query.push(" ORDER BY name ASC LIMIT ");
        query.push_bind(filter.pagination.limit);
        query.push(" OFFSET ");
        query.push_bind(filter.pagination.offset);

        let fighters: Vec<FighterSummary> = query.build_query_as().fetch_all(self.pool).await?;

        Ok((fighters, total_items))
    }

    async fn count(&self, filter: &FighterFilter) -> Result<i64> {
        let mut query = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM fighters WHERE 1=1");
        push_fighter_filters(&mut query, filter);

        let count = query
            .build_query_scalar::<i64>()
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Fighter> {
        let mut query = QueryBuilder::<Postgres>::new("SELECT ");
        query.push(FIGHTER_COLUMNS);
        query.push(" FROM fighters WHERE id = ");
        query.push_bind(id);

        query
            .build_query_as::<Fighter>()
            .fetch_optional(self.pool)
            .await?
            .ok_or(StorageError::NotFound)
    }

    /// Fighters carrying a value in the legacy `rank` column.
    pub async fn list_legacy_ranked(&self) -> Result<Vec<Fighter>> {
        let mut query = legacy_ranked_query();
        let fighters = query.build_query_as().fetch_all(self.pool).await?;

        Ok(fighters)
    }

    pub async fn distinct_nationalities(&self) -> Result<Vec<String>> {
        self.distinct_values("nationality").await
    }

    pub async fn distinct_weight_classes(&self) -> Result<Vec<String>> {
        self.distinct_values("weight_class").await
    }

    async fn distinct_values(&self, column: &'static str) -> Result<Vec<String>> {
        let mut query = QueryBuilder::<Postgres>::new("SELECT DISTINCT ");
        query.push(column);
        query.push(" FROM fighters WHERE ");
        query.push(column);
        query.push(" IS NOT NULL AND ");
        query.push(column);
        query.push(" <> '' ORDER BY ");
        query.push(column);

        let values = query
            .build_query_scalar::<String>()
            .fetch_all(self.pool)
            .await?;

        Ok(values)
    }
}

/// Appends the directory filters to a query that already ends in a
/// `WHERE` clause. Shared by the count and the page query so both always
/// agree on what matches.
pub fn push_fighter_filters(query: &mut QueryBuilder<'_, Postgres>, filter: &FighterFilter) {
    if let Some(ref search) = filter.search {
        query.push(" AND name ILIKE ");
        query.push_bind(format!("%{}%", escape_like(search)));
    }

    let statuses = filter.status_values();
    if !statuses.is_empty() {
        query.push(" AND status = ANY(");
        query.push_bind(statuses.into_iter().map(String::from).collect::<Vec<_>>());
        query.push(")");
    }

    if filter.champion {
        query.push(" AND rank = 'Champion'");
    }

    if !filter.weight_classes.is_empty() {
        query.push(" AND weight_class = ANY(");
        query.push_bind(filter.weight_classes.clone());
        query.push(")");
    }

    if !filter.nationalities.is_empty() {
        query.push(" AND nationality = ANY(");
        query.push_bind(filter.nationalities.clone());
        query.push(")");
    }
}

/// Ordered by name then id so tied ranks come back in the same order.
fn legacy_ranked_query() -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::<Postgres>::new("SELECT ");
    query.push(FIGHTER_COLUMNS);
    query.push(
        r#"
        FROM fighters
        WHERE rank IS NOT NULL
          AND rank <> 'Unranked'
          AND rank <> 'NR'
        ORDER BY name ASC, id ASC"#,
    );
    query
}

/// Escapes `ILIKE` wildcards so user input matches literally.
fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
