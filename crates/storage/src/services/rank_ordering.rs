//! Ordering of free-form rank labels ("Champion", "#3", "NR", ...).

/// Sort key for labels that carry no usable rank.
pub const UNRANKED_KEY: i32 = 999;

const CHAMPION: &str = "Champion";
const INTERIM_CHAMPION: &str = "Interim Champion";

/// Maps a rank label to an ascending sort key (lower is better).
pub fn rank_key(label: &str) -> i32 {
    if label.is_empty() {
        return UNRANKED_KEY;
    }
    if label == CHAMPION {
        return -2;
    }
    if label == INTERIM_CHAMPION {
        return -1;
    }
    if let Some(rest) = label.strip_prefix('#') {
        return parse_leading_int(rest).unwrap_or(UNRANKED_KEY);
    }
    parse_leading_int(label).unwrap_or(UNRANKED_KEY)
}

/// Whether the label denotes a place in a divisional ranking. Blank, "NR"
/// and "Unranked" are not competitive ranks.
pub fn is_competitive_rank(label: &str) -> bool {
    label == CHAMPION
        || label == INTERIM_CHAMPION
        || label.starts_with('#')
        || parse_leading_int(label).is_some()
}

/// Display form of a rank snapshot. Cards abbreviate the champion as "C"
/// or "#C".
pub fn display_rank(label: Option<&str>) -> Option<String> {
    let label = label.map(str::trim).filter(|l| !l.is_empty())?;
    match label {
        "C" | "#C" => Some(CHAMPION.to_string()),
        other => Some(other.to_string()),
    }
}

/// Stable sort by [`rank_key`]; equal keys keep their input order.
pub fn sort_by_rank<T, F>(items: &mut [T], label_of: F)
where
    F: Fn(&T) -> &str,
{
    items.sort_by_key(|item| rank_key(label_of(item)));
}

/// Integer prefix of `s` after leading whitespace, with an optional sign.
/// `"3 (tied)"` parses as 3; `"NR"` does not parse.
fn parse_leading_int(s: &str) -> Option<i32> {
    let s = s.trim_start();
    let (sign, digits) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    digits[..end].parse::<i32>().ok().map(|n| sign * n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_order_of_labels() {
        assert!(rank_key("Champion") < rank_key("Interim Champion"));
        assert!(rank_key("Interim Champion") < rank_key("#1"));
        assert!(rank_key("#1") < rank_key("#2"));
        assert!(rank_key("#2") < rank_key("7"));
        assert!(rank_key("7") < rank_key("NR"));
        assert_eq!(rank_key("NR"), rank_key(""));
        assert_eq!(rank_key(""), rank_key("garbage"));
        assert_eq!(rank_key("Unranked"), UNRANKED_KEY);
    }

    #[test]
    fn test_hash_prefix() {
        assert_eq!(rank_key("#3"), 3);
        assert_eq!(rank_key("#15"), 15);
        assert_eq!(rank_key("#C"), UNRANKED_KEY);
        assert_eq!(rank_key("#"), UNRANKED_KEY);
    }

    #[test]
    fn test_leading_digits() {
        assert_eq!(rank_key("3 (tied)"), 3);
        assert_eq!(rank_key(" 4"), 4);
        assert_eq!(rank_key("10th"), 10);
    }

    #[test]
    fn test_competitive_rank_recognition() {
        assert!(is_competitive_rank("Champion"));
        assert!(is_competitive_rank("Interim Champion"));
        assert!(is_competitive_rank("#5"));
        assert!(is_competitive_rank("12"));
        assert!(!is_competitive_rank(""));
        assert!(!is_competitive_rank("NR"));
        assert!(!is_competitive_rank("Unranked"));
    }

    #[test]
    fn test_stable_sort_keeps_sentinel_order() {
        let mut labels = vec![
            ("a", "NR"),
            ("b", "#2"),
            ("c", ""),
            ("d", "Champion"),
            ("e", "garbage"),
            ("f", "#1"),
        ];
        sort_by_rank(&mut labels, |(_, rank)| *rank);
        let order: Vec<&str> = labels.iter().map(|(name, _)| *name).collect();
        assert_eq!(order, vec!["d", "f", "b", "a", "c", "e"]);
    }

    #[test]
    fn test_display_rank() {
        assert_eq!(display_rank(Some("C")).as_deref(), Some("Champion"));
        assert_eq!(display_rank(Some("#C")).as_deref(), Some("Champion"));
        assert_eq!(display_rank(Some("#4")).as_deref(), Some("#4"));
        assert_eq!(display_rank(Some("  ")), None);
        assert_eq!(display_rank(None), None);
    }
}
