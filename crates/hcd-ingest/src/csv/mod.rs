//! CSV reading utilities.

mod header;
mod reader;

pub use header::{normalize_cell, normalize_header};
pub use reader::{CsvTable, read_csv_table, read_csv_table_from_reader};
