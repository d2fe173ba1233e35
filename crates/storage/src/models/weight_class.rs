use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Divisions shown on the rankings page, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, ToSchema)]
pub enum WeightClass {
    Flyweight,
    Bantamweight,
    Featherweight,
    Lightweight,
    Welterweight,
    Middleweight,
    #[serde(rename = "Light Heavyweight")]
    LightHeavyweight,
    Heavyweight,
    #[serde(rename = "Women's Strawweight")]
    WomensStrawweight,
    #[serde(rename = "Women's Flyweight")]
    WomensFlyweight,
    #[serde(rename = "Women's Bantamweight")]
    WomensBantamweight,
    #[serde(rename = "Women's Featherweight")]
    WomensFeatherweight,
}

impl WeightClass {
    pub const ALL: [WeightClass; 12] = [
        Self::Flyweight,
        Self::Bantamweight,
        Self::Featherweight,
        Self::Lightweight,
        Self::Welterweight,
        Self::Middleweight,
        Self::LightHeavyweight,
        Self::Heavyweight,
        Self::WomensStrawweight,
        Self::WomensFlyweight,
        Self::WomensBantamweight,
        Self::WomensFeatherweight,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Flyweight => "Flyweight",
            Self::Bantamweight => "Bantamweight",
            Self::Featherweight => "Featherweight",
            Self::Lightweight => "Lightweight",
            Self::Welterweight => "Welterweight",
            Self::Middleweight => "Middleweight",
            Self::LightHeavyweight => "Light Heavyweight",
            Self::Heavyweight => "Heavyweight",
            Self::WomensStrawweight => "Women's Strawweight",
            Self::WomensFlyweight => "Women's Flyweight",
            Self::WomensBantamweight => "Women's Bantamweight",
            Self::WomensFeatherweight => "Women's Featherweight",
        }
    }

    /// Exact match against the stored division name. Unknown divisions
    /// (catch weights, legacy names) yield `None`.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|wc| wc.as_str() == name)
    }

    /// Index into [`WeightClass::ALL`].
    pub fn position(&self) -> usize {
        *self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_divisions() {
        for wc in WeightClass::ALL {
            assert_eq!(WeightClass::parse(wc.as_str()), Some(wc));
        }
    }

    #[test]
    fn test_parse_unknown_division() {
        assert_eq!(WeightClass::parse("Catch Weight"), None);
        assert_eq!(WeightClass::parse("heavyweight"), None);
        assert_eq!(WeightClass::parse(""), None);
    }

    #[test]
    fn test_position_matches_display_order() {
        for (i, wc) in WeightClass::ALL.iter().enumerate() {
            assert_eq!(wc.position(), i);
        }
    }

    #[test]
    fn test_serializes_display_name() {
        let json = serde_json::to_string(&WeightClass::WomensStrawweight).unwrap();
        assert_eq!(json, "\"Women's Strawweight\"");
    }
}
