use serde::Serialize;

/// Per-activity aggregate over one calendar day.
/// Derived on demand from the log store; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregatedActivity {
    pub activity_id: u32,
    pub name: String,
    pub gallons: u32, // per occurrence, not pre-multiplied
    pub count: u32,
}

impl AggregatedActivity {
    /// Display total for the group, computed at presentation time.
    pub fn total_gallons(&self) -> u32 {
        self.gallons * self.count
    }
}
