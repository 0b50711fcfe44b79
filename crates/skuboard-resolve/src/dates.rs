use chrono::NaiveDate;

/// Formats tried in order by [`parse_date`]; first match wins.
const DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%d-%m-%Y", "%d/%m/%Y", "%Y/%m/%d", "%m/%d/%Y"];

/// Tolerant date parse. A missing or unrecognized cell is `None`, which no
/// selected date can equal.
pub fn parse_date(cell: &str) -> Option<NaiveDate> {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return None;
    }
    // Bare 8-digit cells are the stock export's YYYYMMDD encoding.
    if trimmed.len() == 8 && trimmed.bytes().all(|byte| byte.is_ascii_digit()) {
        return NaiveDate::parse_from_str(trimmed, "%Y%m%d").ok();
    }
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
}

/// Column name the demand and norms pivots use for a date: two-digit day,
/// two-digit month, four-digit year, no separators.
pub fn pivot_column_key(date: NaiveDate) -> String {
    date.format("%d%m%Y").to_string()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{parse_date, pivot_column_key};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    #[test]
    fn parses_each_supported_format() {
        let expected = Some(date(2024, 3, 7));
        assert_eq!(parse_date("2024-03-07"), expected);
        assert_eq!(parse_date("07-03-2024"), expected);
        assert_eq!(parse_date("07/03/2024"), expected);
        assert_eq!(parse_date("2024/03/07"), expected);
        assert_eq!(parse_date("03/07/2024"), Some(date(2024, 7, 3)));
        assert_eq!(parse_date("20240307"), expected);
        assert_eq!(parse_date(" 2024-03-07 "), expected);
    }

    #[test]
    fn rejects_malformed_cells() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("soon"), None);
        assert_eq!(parse_date("2024-13-01"), None);
        assert_eq!(parse_date("07032024"), None);
    }

    #[test]
    fn pivot_key_is_zero_padded() {
        assert_eq!(pivot_column_key(date(2024, 3, 7)), "07032024");
        assert_eq!(pivot_column_key(date(2024, 11, 23)), "23112024");
    }
}
