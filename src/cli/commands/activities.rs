use crate::core::catalog;
use crate::errors::AppResult;
use crate::utils::table::{Column, Table};

/// Print the activity catalog.
pub fn handle() -> AppResult<()> {
    let mut table = Table::new(vec![
        Column::right("ID", 3),
        Column::left("Activity", 18),
        Column::right("Gallons", 8),
    ]);

    for a in catalog::all() {
        table.add_row(vec![
            a.id.to_string(),
            a.name.to_string(),
            a.gallons.to_string(),
        ]);
    }

    println!("💧 Activity catalog (estimated gallons per occurrence):\n");
    print!("{}", table.render());

    Ok(())
}
