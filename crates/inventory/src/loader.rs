//! CSV inventory loader.
//!
//! Expected columns: `item`, `quantity`, `category`, and an expiration
//! column named by one of the configured aliases (`expiration_date`,
//! `expiry_date`, `expires`, `best_before` by default). Header matching is
//! case-insensitive; values are trimmed.
//!
//! Malformed input is rejected here, with the offending line number, so the
//! classifier and formatter can assume well-formed rows.

use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use shelfwatch_core::error::{Error, Result};
use shelfwatch_core::inventory::InventoryRow;
use tracing::debug;

/// Loader settings.
#[derive(Debug, Clone)]
pub struct LoaderOptions {
    /// Accepted header names for the expiration column, matched
    /// case-insensitively in declaration order.
    pub expiration_aliases: Vec<String>,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            expiration_aliases: vec![
                "expiration_date".into(),
                "expiry_date".into(),
                "expires".into(),
                "best_before".into(),
            ],
        }
    }
}

/// Load inventory rows from a CSV file path.
pub fn load_inventory(path: &Path, options: &LoaderOptions) -> Result<Vec<InventoryRow>> {
    if !path.exists() {
        return Err(Error::NotFound {
            path: path.to_path_buf(),
        });
    }
    let file = std::fs::File::open(path)?;
    let rows = read_inventory(file, options)?;
    debug!(path = %path.display(), rows = rows.len(), "Loaded inventory");
    Ok(rows)
}

/// Load inventory rows from any CSV reader.
pub fn read_inventory<R: Read>(reader: R, options: &LoaderOptions) -> Result<Vec<InventoryRow>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| Error::DataFormat {
            line: 1,
            message: format!("unreadable header row: {e}"),
        })?
        .clone();

    let columns = Columns::locate(&headers, options)?;

    let mut rows = Vec::new();
    for (idx, result) in csv_reader.records().enumerate() {
        // Header is line 1; first record is line 2.
        let line = idx + 2;
        let record = result.map_err(|e| Error::DataFormat {
            line,
            message: e.to_string(),
        })?;
        rows.push(columns.parse_row(&record, line)?);
    }

    if rows.is_empty() {
        return Err(Error::DataFormat {
            line: 1,
            message: "inventory file contains no rows".into(),
        });
    }

    Ok(rows)
}

/// Resolved column indices for the four required fields.
struct Columns {
    item: usize,
    quantity: usize,
    expiration: usize,
    category: usize,
}

impl Columns {
    fn locate(headers: &csv::StringRecord, options: &LoaderOptions) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.eq_ignore_ascii_case(name))
        };

        let expiration = options
            .expiration_aliases
            .iter()
            .find_map(|alias| find(alias))
            .ok_or_else(|| Error::DataFormat {
                line: 1,
                message: format!(
                    "no expiration column found; expected one of: {}",
                    options.expiration_aliases.join(", ")
                ),
            })?;

        let required = |name: &str| {
            find(name).ok_or_else(|| Error::DataFormat {
                line: 1,
                message: format!("missing required column: {name}"),
            })
        };

        Ok(Self {
            item: required("item")?,
            quantity: required("quantity")?,
            expiration,
            category: required("category")?,
        })
    }

    fn parse_row(&self, record: &csv::StringRecord, line: usize) -> Result<InventoryRow> {
        let field = |idx: usize, name: &str| {
            record.get(idx).ok_or_else(|| Error::DataFormat {
                line,
                message: format!("row is missing the {name} field"),
            })
        };

        let item = field(self.item, "item")?;
        if item.is_empty() {
            return Err(Error::DataFormat {
                line,
                message: "item must not be empty".into(),
            });
        }

        let quantity_raw = field(self.quantity, "quantity")?;
        let quantity: u32 = quantity_raw.parse().map_err(|_| Error::DataFormat {
            line,
            message: format!("quantity is not a non-negative integer: '{quantity_raw}'"),
        })?;

        let expiration_raw = field(self.expiration, "expiration date")?;
        let expiration_date: NaiveDate = expiration_raw.parse().map_err(|_| Error::DataFormat {
            line,
            message: format!("expiration date is not a valid ISO-8601 date: '{expiration_raw}'"),
        })?;

        let category = field(self.category, "category")?;
        if category.is_empty() {
            return Err(Error::DataFormat {
                line,
                message: "category must not be empty".into(),
            });
        }

        Ok(InventoryRow::new(item, quantity, expiration_date, category))
    }
}
