use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Fighter {
    pub id: Uuid,
    pub name: String,
    pub nickname: Option<String>,
    pub weight_class: Option<String>,
    pub nationality: Option<String>,
    pub wins: i32,
    pub losses: i32,
    pub draws: i32,
    pub no_contests: i32,
    pub ko_wins: i32,
    pub sub_wins: i32,
    pub dec_wins: i32,
    pub loss_by_ko: i32,
    pub loss_by_sub: i32,
    /// Legacy single rank column, superseded by `fighter_rankings`.
    pub rank: Option<String>,
    pub status: Option<String>,
    pub age: Option<i32>,
    pub height: Option<String>,
    pub weight: Option<String>,
    pub fighting_out_of: Option<String>,
    pub ufc_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub enum FighterStatus {
    Active,
    Retired,
    #[serde(rename = "Not Fighting")]
    NotFighting,
    Unknown,
}

impl FighterStatus {
    pub fn from_label(label: Option<&str>) -> Self {
        match label.map(str::trim) {
            Some("Active") => Self::Active,
            Some("Retired") => Self::Retired,
            Some("Not Fighting") => Self::NotFighting,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Retired => "Retired",
            Self::NotFighting => "Not Fighting",
            Self::Unknown => "Unknown",
        }
    }
}

impl Fighter {
    pub fn status(&self) -> FighterStatus {
        FighterStatus::from_label(self.status.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_label() {
        assert_eq!(FighterStatus::from_label(Some("Active")), FighterStatus::Active);
        assert_eq!(FighterStatus::from_label(Some("Retired")), FighterStatus::Retired);
        assert_eq!(
            FighterStatus::from_label(Some("Not Fighting")),
            FighterStatus::NotFighting
        );
    }

    #[test]
    fn test_status_defaults_to_unknown() {
        assert_eq!(FighterStatus::from_label(None), FighterStatus::Unknown);
        assert_eq!(FighterStatus::from_label(Some("")), FighterStatus::Unknown);
        assert_eq!(FighterStatus::from_label(Some("Suspended")), FighterStatus::Unknown);
    }
}
