use serde::Serialize;

/// One catalog template for a water-consuming activity.
/// Defined once at process start; never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActivityTemplate {
    pub id: u32,
    pub name: &'static str,
    pub gallons: u32, // estimated cost per occurrence
}
