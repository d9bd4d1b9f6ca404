use crate::errors::{AppError, AppResult};
use crate::utils::date::{generate_from_period, generate_range};
use chrono::NaiveDate;

/// Resolve a range expression into inclusive date bounds.
///
/// Accepts a single period (`YYYY`, `YYYY-MM`, `YYYY-MM-DD`) or two
/// periods joined by `:`, taking the first day of the start period and
/// the last day of the end period.
pub fn parse_range(expr: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let days = if let Some((start, end)) = expr.split_once(':') {
        generate_range(start, end).map_err(AppError::InvalidDate)?
    } else {
        generate_from_period(expr).map_err(AppError::InvalidDate)?
    };

    // period generators never return an empty list
    let first = *days.first().ok_or_else(|| AppError::InvalidDate(expr.to_string()))?;
    let last = *days.last().ok_or_else(|| AppError::InvalidDate(expr.to_string()))?;

    Ok((first, last))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_day_collapses_to_itself() {
        let (a, b) = parse_range("2026-08-03").unwrap();
        assert_eq!(a, b);
        assert_eq!(a, NaiveDate::from_ymd_opt(2026, 8, 3).unwrap());
    }

    #[test]
    fn month_expands_to_month_bounds() {
        let (a, b) = parse_range("2026-02").unwrap();
        assert_eq!(a, NaiveDate::from_ymd_opt(2026, 2, 1).unwrap());
        assert_eq!(b, NaiveDate::from_ymd_opt(2026, 2, 28).unwrap());
    }

    #[test]
    fn colon_joins_two_periods() {
        let (a, b) = parse_range("2026-07:2026-08").unwrap();
        assert_eq!(a, NaiveDate::from_ymd_opt(2026, 7, 1).unwrap());
        assert_eq!(b, NaiveDate::from_ymd_opt(2026, 8, 31).unwrap());
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_range("next week").is_err());
    }
}
