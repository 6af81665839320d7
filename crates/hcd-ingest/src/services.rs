//! Loading of the secondary services dataset.
//!
//! Layout: a header row, four leading metadata columns (one of them the
//! institution name), then one column per service item holding `1` when the
//! item is provided.

use std::path::Path;

use hcd_model::{ServiceFlag, ServiceRecord};

use crate::csv::{CsvTable, read_csv_table};
use crate::error::{IngestError, Result};

/// Number of leading metadata columns before the service-item flags.
pub const SERVICE_METADATA_COLUMNS: usize = 4;

/// Header of the institution name column.
pub const SERVICE_NAME_COLUMN: &str = "醫事機構名稱";

pub fn load_services(path: &Path) -> Result<Vec<ServiceRecord>> {
    let table = read_csv_table(path)?;
    let services = services_from_table(&table, path)?;
    tracing::info!(
        path = %path.display(),
        services = services.len(),
        "loaded services"
    );
    Ok(services)
}

pub fn services_from_table(table: &CsvTable, origin: &Path) -> Result<Vec<ServiceRecord>> {
    let name_idx =
        table
            .column_index(SERVICE_NAME_COLUMN)
            .ok_or_else(|| IngestError::NoKnownColumns {
                path: origin.to_path_buf(),
                expected: SERVICE_NAME_COLUMN.to_string(),
            })?;

    let metadata_width = SERVICE_METADATA_COLUMNS.min(table.headers.len());
    let flag_columns: Vec<(usize, &str)> = table
        .headers
        .iter()
        .enumerate()
        .skip(SERVICE_METADATA_COLUMNS)
        .filter(|(_, header)| !header.is_empty())
        .map(|(idx, header)| (idx, header.as_str()))
        .collect();

    let mut services = Vec::with_capacity(table.len());
    for row in &table.rows {
        let institution_name = row[name_idx].trim();
        if institution_name.is_empty() {
            continue;
        }
        let metadata = table.headers[..metadata_width]
            .iter()
            .zip(row.iter())
            .map(|(header, value)| (header.clone(), value.clone()))
            .collect();
        let flags = flag_columns
            .iter()
            .map(|(idx, label)| ServiceFlag::from_cell(*label, &row[*idx]))
            .collect();
        services.push(ServiceRecord {
            institution_name: institution_name.to_string(),
            metadata,
            flags,
        });
    }
    Ok(services)
}
