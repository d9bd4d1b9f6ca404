//! Budget evaluation for a day's total gallons.

/// Result of comparing a day total against the daily budget.
///
/// `raw_percent` is unclamped and may exceed 100 (numeric display);
/// `display_percent` is clamped to [0, 100] (progress indicators). The
/// two presentation policies are exposed explicitly instead of leaving the
/// clamp to call sites.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BudgetStatus {
    pub raw_percent: f64,
    pub display_percent: f64,
    pub over_budget: bool,
}

/// Evaluate `total_gallons` against `budget_gallons`.
///
/// `over_budget` uses strict comparison: exactly at budget is not over.
/// The budget is validated as positive at configuration load time, so
/// evaluation itself is total.
pub fn evaluate_budget(total_gallons: u32, budget_gallons: u32) -> BudgetStatus {
    let raw_percent = 100.0 * f64::from(total_gallons) / f64::from(budget_gallons);

    BudgetStatus {
        raw_percent,
        display_percent: raw_percent.clamp(0.0, 100.0),
        over_budget: total_gallons > budget_gallons,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_at_budget_is_not_over() {
        let status = evaluate_budget(80, 80);
        assert!(!status.over_budget);
        assert_eq!(status.raw_percent, 100.0);
        assert_eq!(status.display_percent, 100.0);
    }

    #[test]
    fn one_over_budget_is_over() {
        let status = evaluate_budget(81, 80);
        assert!(status.over_budget);
        assert!(status.raw_percent > 100.0);
        assert_eq!(status.display_percent, 100.0); // clamped for indicators
    }

    #[test]
    fn zero_total_is_zero_percent() {
        let status = evaluate_budget(0, 80);
        assert_eq!(status.raw_percent, 0.0);
        assert_eq!(status.display_percent, 0.0);
        assert!(!status.over_budget);
    }

    #[test]
    fn laundry_plus_bath_scenario() {
        // Laundry Load (23) + Take a Bath (45) = 68 against a budget of 80
        let status = evaluate_budget(68, 80);
        assert_eq!(status.raw_percent, 85.0);
        assert!(!status.over_budget);
    }

    #[test]
    fn raw_percent_is_unclamped() {
        let status = evaluate_budget(160, 80);
        assert_eq!(status.raw_percent, 200.0);
        assert_eq!(status.display_percent, 100.0);
        assert!(status.over_budget);
    }
}
