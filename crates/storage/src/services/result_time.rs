/// Repairs finish times that were scraped twice into one field, e.g.
/// `"00:04:1400:04:14"`. Any other value is returned unchanged.
pub fn normalize_result_time(raw: &str) -> &str {
    let len = raw.len();
    if len == 0 || len % 2 != 0 || !raw.is_char_boundary(len / 2) {
        return raw;
    }

    let (first, second) = raw.split_at(len / 2);
    if first == second { first } else { raw }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicated_time_collapses() {
        assert_eq!(normalize_result_time("00:04:1400:04:14"), "00:04:14");
        assert_eq!(normalize_result_time("4:594:59"), "4:59");
    }

    #[test]
    fn test_regular_time_unchanged() {
        assert_eq!(normalize_result_time("00:04:14"), "00:04:14");
        assert_eq!(normalize_result_time("5:00"), "5:00");
        assert_eq!(normalize_result_time("4:59"), "4:59");
    }

    #[test]
    fn test_empty_passes_through() {
        assert_eq!(normalize_result_time(""), "");
    }

    #[test]
    fn test_even_length_with_different_halves() {
        assert_eq!(normalize_result_time("12:3412:35"), "12:3412:35");
    }

    #[test]
    fn test_multibyte_input_does_not_panic() {
        assert_eq!(normalize_result_time("éa"), "éa");
    }
}
