use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// Outcome of a fight from one fighter's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum FightOutcome {
    Win,
    Loss,
    Draw,
    #[serde(rename = "NC")]
    NoContest,
    Canceled,
}

/// Outcome of a fight on an event card, without a point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum BoutOutcome {
    Decided,
    Draw,
    NoContest,
    Canceled,
}

/// A fight as listed on a fighter's record, most recent first.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FightRecordEntry {
    pub fight_id: Uuid,
    pub event_id: Uuid,
    pub event_name: String,
    pub event_date: Option<DateTime<Utc>>,
    pub opponent_id: Option<Uuid>,
    pub opponent_name: Option<String>,
    pub fighter_rank: Option<String>,
    pub opponent_rank: Option<String>,
    pub weight_class: Option<String>,
    pub is_main_event: bool,
    pub was_title_fight: bool,
    /// `None` while the fight is pending or the stored result is unusable.
    pub result: Option<FightOutcome>,
    pub method: Option<String>,
    pub method_details: Option<String>,
    pub round: Option<i32>,
    pub time: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CardCorner {
    pub fighter_id: Option<Uuid>,
    pub name: Option<String>,
    pub rank: Option<String>,
    pub was_champion: bool,
}

/// A fight as listed on an event card, in card order.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CardFight {
    pub fight_id: Uuid,
    pub fight_order: Option<i32>,
    pub fighter1: CardCorner,
    pub fighter2: CardCorner,
    pub weight_class: Option<String>,
    pub is_main_event: bool,
    pub was_title_fight: bool,
    pub winner_id: Option<Uuid>,
    pub outcome: Option<BoutOutcome>,
    pub method: Option<String>,
    pub method_details: Option<String>,
    pub round: Option<i32>,
    pub time: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FightRecordResponse {
    pub fights: Vec<FightRecordEntry>,
    pub total: usize,
}
