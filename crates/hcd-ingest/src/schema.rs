//! Per-source column mapping from CSV headers to typed records.
//!
//! The published datasets do not agree on header text: the agency files use
//! the long `醫事機構…` names while hand-maintained extracts use the short
//! forms. Each field is therefore resolved from an ordered alias list.

use std::path::Path;

use hcd_model::{RawRecord, SourceCategory, non_blank};

use crate::csv::CsvTable;
use crate::error::{IngestError, Result};

/// Ordered header aliases for one record field.
#[derive(Debug, Clone, Copy)]
pub struct ColumnAliases {
    pub field: &'static str,
    pub aliases: &'static [&'static str],
}

/// Header aliases for every record field.
#[derive(Debug, Clone, Copy)]
pub struct SourceSchema {
    pub name: ColumnAliases,
    pub address: ColumnAliases,
    pub phone: ColumnAliases,
    pub team: ColumnAliases,
    pub code: ColumnAliases,
}

/// Column layout shared by the home-care and hospice datasets.
pub const INSTITUTION_SCHEMA: SourceSchema = SourceSchema {
    name: ColumnAliases {
        field: "name",
        aliases: &["醫事機構名稱", "名稱"],
    },
    address: ColumnAliases {
        field: "address",
        aliases: &["醫事機構地址", "地址"],
    },
    phone: ColumnAliases {
        field: "phone",
        aliases: &["醫事機構電話", "電話"],
    },
    team: ColumnAliases {
        field: "team",
        aliases: &["整合團隊名稱", "團隊"],
    },
    code: ColumnAliases {
        field: "code",
        aliases: &["醫事機構代碼", "代碼"],
    },
};

/// Resolved column indices for one table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnMap {
    pub name: Option<usize>,
    pub address: Option<usize>,
    pub phone: Option<usize>,
    pub team: Option<usize>,
    pub code: Option<usize>,
}

impl ColumnMap {
    fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.address.is_none()
            && self.phone.is_none()
            && self.team.is_none()
            && self.code.is_none()
    }
}

impl SourceSchema {
    fn fields(&self) -> [&ColumnAliases; 5] {
        [&self.name, &self.address, &self.phone, &self.team, &self.code]
    }

    pub fn resolve(&self, table: &CsvTable) -> ColumnMap {
        ColumnMap {
            name: table.first_column_of(self.name.aliases),
            address: table.first_column_of(self.address.aliases),
            phone: table.first_column_of(self.phone.aliases),
            team: table.first_column_of(self.team.aliases),
            code: table.first_column_of(self.code.aliases),
        }
    }

    /// Maps every row of `table` to a [`RawRecord`] tagged with `source`.
    ///
    /// Missing columns yield `None` fields; validation happens later when the
    /// dataset is built. A table with none of the schema's columns is an
    /// error since it is almost certainly the wrong file.
    pub fn map_table(
        &self,
        table: &CsvTable,
        source: SourceCategory,
        origin: &Path,
    ) -> Result<Vec<RawRecord>> {
        let columns = self.resolve(table);
        if columns.is_empty() {
            let expected = self
                .fields()
                .iter()
                .flat_map(|field| field.aliases.iter().copied())
                .collect::<Vec<_>>()
                .join(", ");
            return Err(IngestError::NoKnownColumns {
                path: origin.to_path_buf(),
                expected,
            });
        }
        for field in self.fields() {
            if table.first_column_of(field.aliases).is_none() {
                tracing::debug!(
                    path = %origin.display(),
                    field = field.field,
                    "source has no column for field"
                );
            }
        }

        let cell = |row: usize, column: Option<usize>| -> Option<String> {
            column
                .and_then(|idx| table.cell(row, idx))
                .and_then(|value| non_blank(Some(value)))
                .map(str::to_string)
        };

        Ok((0..table.len())
            .map(|row| RawRecord {
                name: cell(row, columns.name),
                address: cell(row, columns.address),
                phone: cell(row, columns.phone),
                team: cell(row, columns.team),
                code: cell(row, columns.code),
                source: Some(source),
            })
            .collect())
    }
}
