//! CSV reading into header-addressed string tables.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{IngestError, Result};

use super::header::{normalize_cell, normalize_header};

/// A CSV file held as normalized strings, addressed by header name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Index of the first column whose header equals `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Index of the first alias present in the header row.
    pub fn first_column_of(&self, aliases: &[&str]) -> Option<usize> {
        aliases.iter().find_map(|alias| self.column_index(alias))
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .map(String::as_str)
    }
}

/// Reads a CSV file whose first non-blank row is the header.
pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    let file = File::open(path).map_err(|e| IngestError::open(path, e))?;
    let table = read_csv_table_from_reader(file, path)?;
    if table.headers.is_empty() {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    tracing::debug!(
        path = %path.display(),
        columns = table.headers.len(),
        rows = table.rows.len(),
        "read csv table"
    );
    Ok(table)
}

/// Reads CSV text from any reader; `origin` is only used in error messages.
///
/// Blank rows are skipped and short rows are padded to the header width.
pub fn read_csv_table_from_reader<R: Read>(reader: R, origin: &Path) -> Result<CsvTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::CsvParse {
            path: origin.to_path_buf(),
            source,
        })?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(|value| value.is_empty()) {
            continue;
        }
        raw_rows.push(row);
    }

    let mut raw_rows = raw_rows.into_iter();
    let Some(header_row) = raw_rows.next() else {
        return Ok(CsvTable::default());
    };
    let headers: Vec<String> = header_row.iter().map(|h| normalize_header(h)).collect();

    let rows = raw_rows
        .map(|mut row| {
            row.resize(headers.len(), String::new());
            row
        })
        .collect();

    Ok(CsvTable { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_read_csv_table_basic() {
        let file = create_temp_csv("名稱,地址\n甲醫院,台北市大安區\n乙診所,新北市板橋區\n");
        let table = read_csv_table(file.path()).unwrap();

        assert_eq!(table.headers, vec!["名稱", "地址"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.cell(1, 0), Some("乙診所"));
    }

    #[test]
    fn test_read_csv_table_with_bom_and_blank_lines() {
        let file = create_temp_csv("\u{feff}名稱,地址\n\n甲醫院,台北市\n,\n");
        let table = read_csv_table(file.path()).unwrap();

        assert_eq!(table.column_index("名稱"), Some(0));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_short_rows_are_padded() {
        let file = create_temp_csv("名稱,地址,電話\n甲醫院,台北市\n");
        let table = read_csv_table(file.path()).unwrap();

        assert_eq!(table.rows[0], vec!["甲醫院", "台北市", ""]);
    }

    #[test]
    fn test_quoted_commas_stay_in_cell() {
        let file = create_temp_csv("名稱,地址\n\"甲醫院\",\"台北市大安區, 3樓\"\n");
        let table = read_csv_table(file.path()).unwrap();

        assert_eq!(table.cell(0, 1), Some("台北市大安區, 3樓"));
    }

    #[test]
    fn test_empty_file_is_an_error() {
        let file = create_temp_csv("");
        let result = read_csv_table(file.path());

        assert!(matches!(result, Err(IngestError::EmptyCsv { .. })));
    }

    #[test]
    fn test_missing_file() {
        let result = read_csv_table(Path::new("/definitely/not/here.csv"));
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }

    #[test]
    fn test_first_column_of_prefers_alias_order() {
        let table = CsvTable {
            headers: vec!["名稱".into(), "醫事機構名稱".into()],
            rows: vec![],
        };
        assert_eq!(table.first_column_of(&["醫事機構名稱", "名稱"]), Some(1));
        assert_eq!(table.first_column_of(&["代碼"]), None);
    }
}
