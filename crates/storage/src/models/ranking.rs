use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Row of `fighter_rankings`. Division and rank are nullable in the table;
/// rows missing either are skipped by readers.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct RankingEntry {
    pub id: Uuid,
    pub fighter_id: Uuid,
    pub weight_class: Option<String>,
    pub rank: Option<String>,
}

/// Ranking row joined with the display fields of the ranked fighter. The
/// fighter columns are NULL when the reference is dangling.
#[derive(Debug, Clone, FromRow)]
pub struct RankingWithFighter {
    #[sqlx(flatten)]
    pub entry: RankingEntry,
    pub fighter_name: Option<String>,
    pub fighter_nickname: Option<String>,
    pub fighter_wins: Option<i32>,
    pub fighter_losses: Option<i32>,
    pub fighter_draws: Option<i32>,
    pub fighter_status: Option<String>,
}
