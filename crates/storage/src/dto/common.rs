use serde::{Deserialize, Deserializer};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

pub const DEFAULT_OFFSET: i64 = 0;
pub const DEFAULT_LIMIT: i64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, IntoParams, ToSchema, Validate)]
pub struct PaginationParams {
    #[serde(default = "default_offset")]
    #[validate(range(min = 0, message = "offset must be >= 0"))]
    pub offset: i64,
    #[serde(default = "default_limit")]
    #[validate(range(min = 1, max = 100, message = "limit must be between 1 and 100"))]
    pub limit: i64,
}

fn default_offset() -> i64 {
    DEFAULT_OFFSET
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            offset: DEFAULT_OFFSET,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Reads an integer query value. Anything that does not parse as an
/// integer is treated as absent, so the field's default applies.
pub fn lenient_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| value.trim().parse().ok()))
}

impl PaginationParams {
    /// Whether rows remain after this page, given the total row count.
    pub fn has_more(&self, total_items: i64) -> bool {
        self.offset + self.limit < total_items
    }

    pub fn next_offset(&self) -> i64 {
        self.offset + self.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = PaginationParams::default();
        assert_eq!(params.offset, 0);
        assert_eq!(params.limit, 10);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_limit_bounds() {
        let zero = PaginationParams { offset: 0, limit: 0 };
        assert!(zero.validate().is_err());

        let too_large = PaginationParams {
            offset: 0,
            limit: 101,
        };
        assert!(too_large.validate().is_err());

        let negative_offset = PaginationParams {
            offset: -1,
            limit: 10,
        };
        assert!(negative_offset.validate().is_err());
    }

    #[derive(Deserialize)]
    struct Paging {
        #[serde(default, deserialize_with = "lenient_int")]
        limit: Option<i64>,
    }

    #[test]
    fn test_lenient_int() {
        let parsed: Paging = serde_json::from_str(r#"{"limit": "25"}"#).unwrap();
        assert_eq!(parsed.limit, Some(25));

        let garbage: Paging = serde_json::from_str(r#"{"limit": "ten"}"#).unwrap();
        assert_eq!(garbage.limit, None);

        let missing: Paging = serde_json::from_str("{}").unwrap();
        assert_eq!(missing.limit, None);
    }

    #[test]
    fn test_has_more() {
        let params = PaginationParams {
            offset: 10,
            limit: 10,
        };
        assert!(params.has_more(21));
        assert!(!params.has_more(20));
        assert_eq!(params.next_offset(), 20);
    }
}
