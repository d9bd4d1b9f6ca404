//! Static catalog of water-consuming activity templates.
//!
//! Order and values are part of the behavioral contract: gallon costs are
//! per-occurrence estimates copied onto each log entry at creation time.

use crate::models::activity::ActivityTemplate;

pub const CATALOG: [ActivityTemplate; 10] = [
    ActivityTemplate { id: 1, name: "5 Minute Shower", gallons: 15 },
    ActivityTemplate { id: 2, name: "10 Minute Shower", gallons: 30 },
    ActivityTemplate { id: 3, name: "Toilet Flush", gallons: 3 },
    ActivityTemplate { id: 4, name: "Dishwasher Load", gallons: 5 },
    ActivityTemplate { id: 5, name: "Laundry Load", gallons: 23 },
    ActivityTemplate { id: 6, name: "Hand Wash Dishes", gallons: 4 },
    ActivityTemplate { id: 7, name: "Garden Watering", gallons: 12 },
    ActivityTemplate { id: 8, name: "Brush Teeth", gallons: 1 },
    ActivityTemplate { id: 9, name: "Shave", gallons: 2 },
    ActivityTemplate { id: 10, name: "Take a Bath", gallons: 45 },
];

pub fn all() -> &'static [ActivityTemplate] {
    &CATALOG
}

pub fn find_by_id(id: u32) -> Option<&'static ActivityTemplate> {
    CATALOG.iter().find(|a| a.id == id)
}

/// Case-insensitive name lookup, used by the CLI.
pub fn find_by_name(name: &str) -> Option<&'static ActivityTemplate> {
    let wanted = name.trim();
    CATALOG.iter().find(|a| a.name.eq_ignore_ascii_case(wanted))
}

/// Resolve a CLI argument: numeric id first, then name.
pub fn resolve(arg: &str) -> Option<&'static ActivityTemplate> {
    if let Ok(id) = arg.trim().parse::<u32>() {
        return find_by_id(id);
    }
    find_by_name(arg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_ten_entries_with_sequential_ids() {
        assert_eq!(CATALOG.len(), 10);
        for (i, a) in CATALOG.iter().enumerate() {
            assert_eq!(a.id, i as u32 + 1);
            assert!(a.gallons > 0);
        }
    }

    #[test]
    fn contract_values_for_first_and_last_entries() {
        let shower = find_by_id(1).unwrap();
        assert_eq!(shower.name, "5 Minute Shower");
        assert_eq!(shower.gallons, 15);

        let bath = find_by_id(10).unwrap();
        assert_eq!(bath.name, "Take a Bath");
        assert_eq!(bath.gallons, 45);
    }

    #[test]
    fn resolve_accepts_id_or_case_insensitive_name() {
        assert_eq!(resolve("5").unwrap().name, "Laundry Load");
        assert_eq!(resolve("toilet flush").unwrap().id, 3);
        assert_eq!(resolve("  TAKE A BATH ").unwrap().id, 10);
        assert!(resolve("11").is_none());
        assert!(resolve("Swim").is_none());
    }
}
