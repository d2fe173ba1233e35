use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A bout on an event card. Names and ranks are snapshots taken when the
/// card was published and do not follow later ranking changes.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Fight {
    pub id: Uuid,
    pub event_id: Uuid,
    pub fighter1_id: Option<Uuid>,
    pub fighter2_id: Option<Uuid>,
    pub fighter1_name: Option<String>,
    pub fighter2_name: Option<String>,
    pub fighter1_rank: Option<String>,
    pub fighter2_rank: Option<String>,
    pub fighter1_was_champion: bool,
    pub fighter2_was_champion: bool,
    pub weight_class: Option<String>,
    pub is_main_event: bool,
    pub was_title_fight: bool,
    pub fight_order: Option<i32>,
    pub winner_id: Option<Uuid>,
    pub result_method: Option<String>,
    pub result_method_details: Option<String>,
    pub result_round: Option<i32>,
    pub result_time: Option<String>,
}

/// A fight joined with the parent event fields needed for record views.
#[derive(Debug, Clone, FromRow)]
pub struct FightWithEvent {
    #[sqlx(flatten)]
    pub fight: Fight,
    pub event_name: String,
    pub event_date: Option<DateTime<Utc>>,
}
