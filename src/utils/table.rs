//! Table rendering utilities for CLI outputs.

pub enum Align {
    Left,
    Right,
}

pub struct Column {
    pub header: String,
    pub width: usize,
    pub align: Align,
}

impl Column {
    pub fn left(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
            align: Align::Left,
        }
    }

    /// Numeric columns (counts, gallons) read better right-aligned.
    pub fn right(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
            align: Align::Right,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn cell(col: &Column, value: &str) -> String {
        match col.align {
            Align::Left => format!("{:<width$} ", value, width = col.width),
            Align::Right => format!("{:>width$} ", value, width = col.width),
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header always left-aligned
        for col in &self.columns {
            out.push_str(&format!("{:<width$} ", col.header, width = col.width));
        }
        out.push('\n');

        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                out.push_str(&Self::cell(col, &row[i]));
            }
            out.push('\n');
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_aligned_cells() {
        let mut t = Table::new(vec![Column::left("Name", 6), Column::right("Gal", 4)]);
        t.add_row(vec!["Shave".to_string(), "2".to_string()]);

        let out = t.render();
        assert!(out.contains("Shave "));
        assert!(out.contains("   2"));
    }
}
