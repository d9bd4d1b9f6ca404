/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

/// Budget state color:
/// over budget → red
/// at or under → green
pub fn color_for_budget(over_budget: bool) -> &'static str {
    if over_budget { RED } else { GREEN }
}

/// Day-total color for the weekly view:
/// 0 → grey, otherwise budget state color.
pub fn color_for_day_total(total_gallons: u32, over_budget: bool) -> &'static str {
    if total_gallons == 0 {
        GREY
    } else {
        color_for_budget(over_budget)
    }
}
