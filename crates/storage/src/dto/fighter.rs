use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::common::{DEFAULT_LIMIT, DEFAULT_OFFSET, PaginationParams};
use super::fight::FightRecordEntry;
use super::ranking::FighterRankingInfo;
use crate::models::{Fighter, FighterStatus};

/// Status filter value that also matches fighters marked "Not Fighting".
pub const RETIRED_STATUS: &str = "Retired";

/// Filters for the fighter directory. Weight class and nationality accept
/// several values each and match any of them.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct FighterFilter {
    #[validate(nested)]
    pub pagination: PaginationParams,
    /// Case-insensitive substring of the fighter name.
    #[validate(length(max = 100, message = "search must be at most 100 characters"))]
    pub search: Option<String>,
    pub status: Option<String>,
    pub champion: bool,
    pub weight_classes: Vec<String>,
    pub nationalities: Vec<String>,
}

impl FighterFilter {
    /// Builds a filter from raw query pairs, keeping repeated
    /// `weightClass` and `nationality` keys. Empty values are ignored and
    /// paging values that are not integers keep their defaults.
    pub fn from_query_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut filter = Self::default();

        for (key, value) in pairs {
            let value = value.as_ref().trim();
            if value.is_empty() {
                continue;
            }

            match key.as_ref() {
                "offset" => filter.pagination.offset = value.parse().unwrap_or(DEFAULT_OFFSET),
                "limit" => filter.pagination.limit = value.parse().unwrap_or(DEFAULT_LIMIT),
                "search" => filter.search = Some(value.to_string()),
                "status" => filter.status = Some(value.to_string()),
                "champion" => filter.champion = value == "true",
                "weightClass" => filter.weight_classes.push(value.to_string()),
                "nationality" => filter.nationalities.push(value.to_string()),
                _ => {}
            }
        }

        filter
    }

    /// Stored status values matched by the status filter.
    pub fn status_values(&self) -> Vec<&str> {
        match self.status.as_deref() {
            None => Vec::new(),
            Some(RETIRED_STATUS) => vec![
                FighterStatus::Retired.as_str(),
                FighterStatus::NotFighting.as_str(),
            ],
            Some(other) => vec![other],
        }
    }
}

/// Row of the fighter directory.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct FighterSummary {
    pub id: Uuid,
    pub name: String,
    pub weight_class: Option<String>,
    pub nationality: Option<String>,
    pub wins: i32,
    pub losses: i32,
    pub draws: i32,
    pub no_contests: i32,
    pub rank: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FighterListResponse {
    pub fighters: Vec<FighterSummary>,
    pub count: i64,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptionsResponse {
    pub nationalities: Vec<String>,
    pub weight_classes: Vec<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FighterRecordCounts {
    pub wins: i32,
    pub losses: i32,
    pub draws: i32,
    pub no_contests: i32,
    pub ko_wins: i32,
    pub sub_wins: i32,
    pub dec_wins: i32,
    pub loss_by_ko: i32,
    pub loss_by_sub: i32,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FighterDetail {
    pub id: Uuid,
    pub name: String,
    pub nickname: Option<String>,
    pub weight_class: Option<String>,
    pub nationality: Option<String>,
    pub record: FighterRecordCounts,
    pub rank: Option<String>,
    pub status: FighterStatus,
    pub age: Option<i32>,
    pub height: Option<String>,
    pub weight: Option<String>,
    pub fighting_out_of: Vec<String>,
    pub ufc_url: Option<String>,
}

impl From<Fighter> for FighterDetail {
    fn from(fighter: Fighter) -> Self {
        let status = fighter.status();
        Self {
            id: fighter.id,
            name: fighter.name,
            nickname: fighter.nickname.filter(|n| !n.trim().is_empty()),
            weight_class: fighter.weight_class,
            nationality: fighter.nationality,
            record: FighterRecordCounts {
                wins: fighter.wins,
                losses: fighter.losses,
                draws: fighter.draws,
                no_contests: fighter.no_contests,
                ko_wins: fighter.ko_wins,
                sub_wins: fighter.sub_wins,
                dec_wins: fighter.dec_wins,
                loss_by_ko: fighter.loss_by_ko,
                loss_by_sub: fighter.loss_by_sub,
            },
            rank: fighter.rank.filter(|r| !r.trim().is_empty() && r != "NR"),
            status,
            age: fighter.age.filter(|age| *age > 0),
            height: fighter.height,
            weight: fighter.weight,
            fighting_out_of: fighter
                .fighting_out_of
                .as_deref()
                .map(split_locations)
                .unwrap_or_default(),
            ufc_url: fighter.ufc_url,
        }
    }
}

/// Profile page payload: the fighter, their ranking-table entries and the
/// first page of their fight record.
#[derive(Debug, Serialize, ToSchema)]
pub struct FighterProfileResponse {
    pub fighter: FighterDetail,
    pub rankings: Vec<FighterRankingInfo>,
    pub recent_fights: Vec<FightRecordEntry>,
    pub total_fights: usize,
}

/// `fighting_out_of` is stored as a brace-wrapped list,
/// e.g. `{Las Vegas, Nevada}, {Albuquerque, New Mexico}`.
fn split_locations(raw: &str) -> Vec<String> {
    let trimmed = raw.trim();
    let inner = trimmed.strip_prefix('{').unwrap_or(trimmed);
    let inner = inner.strip_suffix('}').unwrap_or(inner);

    inner
        .split("}, {")
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_from_query_pairs() {
        let pairs = vec![
            ("offset", "20"),
            ("limit", "5"),
            ("search", "silva"),
            ("weightClass", "Lightweight"),
            ("weightClass", "Welterweight"),
            ("nationality", "Brazil"),
            ("champion", "true"),
            ("unknown", "ignored"),
        ];

        let filter = FighterFilter::from_query_pairs(pairs);
        assert_eq!(filter.pagination.offset, 20);
        assert_eq!(filter.pagination.limit, 5);
        assert_eq!(filter.search.as_deref(), Some("silva"));
        assert_eq!(filter.weight_classes, vec!["Lightweight", "Welterweight"]);
        assert_eq!(filter.nationalities, vec!["Brazil"]);
        assert!(filter.champion);
    }

    #[test]
    fn test_filter_defaults() {
        let filter = FighterFilter::from_query_pairs(Vec::<(String, String)>::new());
        assert_eq!(filter, FighterFilter::default());
        assert_eq!(filter.pagination.limit, 10);
        assert!(filter.validate().is_ok());
    }

    #[test]
    fn test_filter_non_numeric_paging_uses_defaults() {
        let filter = FighterFilter::from_query_pairs(vec![("offset", "abc"), ("limit", "ten")]);
        assert_eq!(filter.pagination, PaginationParams::default());
        assert!(filter.validate().is_ok());
    }

    #[test]
    fn test_filter_validation_covers_pagination() {
        let filter = FighterFilter::from_query_pairs(vec![("limit", "500")]);
        assert!(filter.validate().is_err());
    }

    #[test]
    fn test_retired_status_includes_not_fighting() {
        let filter = FighterFilter {
            status: Some("Retired".to_string()),
            ..Default::default()
        };
        assert_eq!(filter.status_values(), vec!["Retired", "Not Fighting"]);

        let active = FighterFilter {
            status: Some("Active".to_string()),
            ..Default::default()
        };
        assert_eq!(active.status_values(), vec!["Active"]);
    }

    #[test]
    fn test_split_locations() {
        assert_eq!(
            split_locations("{Las Vegas, Nevada}, {Albuquerque, New Mexico}"),
            vec!["Las Vegas, Nevada", "Albuquerque, New Mexico"]
        );
        assert_eq!(split_locations("Dublin, Ireland"), vec!["Dublin, Ireland"]);
        assert!(split_locations("").is_empty());
    }
}
