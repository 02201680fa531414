use chrono::{NaiveDate, Utc};

use super::ApiError;
use crate::domain::{DateRange, DateUnit, Genre, RankingSize};

pub fn parse_genre(raw: Option<&str>) -> Result<Option<Genre>, ApiError> {
    match raw {
        None | Some("") => Ok(None),
        Some(value) => {
            let genre = value
                .parse::<Genre>()
                .map_err(|e| ApiError::validation(e.to_string()))?;
            Ok(Some(genre))
        }
    }
}

/// Cursor date for a ranking window, `YYYY-MM-DD`. Defaults to the
/// current UTC date when absent.
pub fn parse_cursor_date(raw: Option<&str>) -> Result<NaiveDate, ApiError> {
    match raw {
        None | Some("") => Ok(Utc::now().date_naive()),
        Some(value) => NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
            ApiError::validation(format!("Invalid date: {}. Expected YYYY-MM-DD", value))
        }),
    }
}

pub fn parse_date_range(
    date: Option<&str>,
    unit: Option<&str>,
) -> Result<DateRange, ApiError> {
    let cursor = parse_cursor_date(date)?;

    let unit = match unit {
        None | Some("") => DateUnit::Day,
        Some(value) => value
            .parse::<DateUnit>()
            .map_err(|e| ApiError::validation(e.to_string()))?,
    };

    Ok(DateRange::from_unit(cursor, unit))
}

pub fn parse_ranking_size(raw: Option<u64>) -> Result<RankingSize, ApiError> {
    let size = raw.unwrap_or(10);
    RankingSize::new(size).map_err(|e| ApiError::validation(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_genre() {
        assert_eq!(parse_genre(None).unwrap(), None);
        assert_eq!(parse_genre(Some("")).unwrap(), None);
        assert_eq!(parse_genre(Some("concert")).unwrap(), Some(Genre::Concert));
        assert!(parse_genre(Some("opera")).is_err());
    }

    #[test]
    fn test_parse_cursor_date() {
        assert_eq!(
            parse_cursor_date(Some("2026-03-10")).unwrap(),
            NaiveDate::from_ymd_opt(2026, 3, 10).unwrap()
        );
        assert!(parse_cursor_date(Some("10/03/2026")).is_err());
        assert!(parse_cursor_date(None).is_ok());
    }

    #[test]
    fn test_parse_date_range_rejects_unknown_unit() {
        assert!(parse_date_range(Some("2026-03-10"), Some("week")).is_ok());
        assert!(parse_date_range(Some("2026-03-10"), Some("year")).is_err());
    }

    #[test]
    fn test_parse_ranking_size() {
        assert_eq!(parse_ranking_size(None).unwrap().get(), 10);
        assert_eq!(parse_ranking_size(Some(50)).unwrap().get(), 50);
        assert!(parse_ranking_size(Some(7)).is_err());
        assert!(parse_ranking_size(Some(0)).is_err());
    }
}
