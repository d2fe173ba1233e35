use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{FighterStatus, RankingEntry, WeightClass};
use crate::services::rank_ordering::display_rank;

/// One line of a divisional ranking.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RosterEntry {
    pub fighter_id: Uuid,
    pub name: String,
    pub nickname: Option<String>,
    pub wins: i32,
    pub losses: i32,
    pub draws: i32,
    pub status: FighterStatus,
    pub rank: String,
    pub weight_class: WeightClass,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct DivisionRoster {
    pub weight_class: WeightClass,
    pub fighters: Vec<RosterEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RosterResponse {
    /// Every known division in display order, including empty ones.
    pub divisions: Vec<DivisionRoster>,
    /// Divisions with at least one ranked fighter, in display order.
    pub active_divisions: Vec<WeightClass>,
    /// Division shown first.
    pub selected: WeightClass,
}

/// A ranking-table entry as shown on a fighter profile.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FighterRankingInfo {
    pub weight_class: String,
    pub rank: String,
}

impl FighterRankingInfo {
    /// `None` when the row lacks a division or a rank.
    pub fn from_entry(entry: RankingEntry) -> Option<Self> {
        Some(Self {
            rank: display_rank(entry.rank.as_deref())?,
            weight_class: entry.weight_class.filter(|w| !w.trim().is_empty())?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_ranking_shows_champion() {
        let entry = RankingEntry {
            id: Uuid::new_v4(),
            fighter_id: Uuid::new_v4(),
            weight_class: Some("Lightweight".to_string()),
            rank: Some("C".to_string()),
        };
        let info = FighterRankingInfo::from_entry(entry).unwrap();
        assert_eq!(info.rank, "Champion");
        assert_eq!(info.weight_class, "Lightweight");
    }

    #[test]
    fn test_profile_ranking_skips_incomplete_rows() {
        let entry = RankingEntry {
            id: Uuid::new_v4(),
            fighter_id: Uuid::new_v4(),
            weight_class: Some("Lightweight".to_string()),
            rank: None,
        };
        assert!(FighterRankingInfo::from_entry(entry).is_none());
    }
}
