use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{RankingEntry, RankingWithFighter};

/// Ordered so that tied ranks keep the same relative order on every read.
const RANKINGS_WITH_FIGHTERS: &str = r#"
    SELECT
        r.id,
        r.fighter_id,
        r.weight_class,
        r.rank,
        f.name AS fighter_name,
        f.nickname AS fighter_nickname,
        f.wins AS fighter_wins,
        f.losses AS fighter_losses,
        f.draws AS fighter_draws,
        f.status AS fighter_status
    FROM fighter_rankings r
    LEFT JOIN fighters f ON f.id = r.fighter_id
    ORDER BY f.name ASC NULLS LAST, r.id ASC
"#;

pub struct RankingRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> RankingRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Every ranking-table entry with the ranked fighter's display fields.
    pub async fn list_with_fighters(&self) -> Result<Vec<RankingWithFighter>> {
        let rankings = sqlx::query_as::<_, RankingWithFighter>(RANKINGS_WITH_FIGHTERS)
            .fetch_all(self.pool)
            .await?;

        Ok(rankings)
    }

    pub async fn list_for_fighter(&self, fighter_id: Uuid) -> Result<Vec<RankingEntry>> {
        let rankings = sqlx::query_as::<_, RankingEntry>(
            r#"
            SELECT id, fighter_id, weight_class, rank
            FROM fighter_rankings
            WHERE fighter_id = $1
            ORDER BY weight_class, id
            "#,
        )
        .bind(fighter_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rankings)
    }
}
