//! Per-bucket CSV slice export.
//!
//! Writes `expired_items.csv`, `expiring_items.csv`, and `fresh_items.csv`
//! into a target directory so kitchen staff can act on each bucket without
//! opening the report. Columns match the canonical input layout.

use std::path::{Path, PathBuf};

use shelfwatch_core::error::{Error, Result};
use shelfwatch_core::inventory::{ExpirationBuckets, InventoryRow};
use tracing::debug;

/// Write the three bucket slices into `dir`, returning the paths written.
///
/// Empty buckets still produce a file with just the header row, mirroring
/// how the report renders empty tables.
pub fn export_slices(buckets: &ExpirationBuckets, dir: &Path) -> Result<Vec<PathBuf>> {
    let slices: [(&str, &[InventoryRow]); 3] = [
        ("expired_items.csv", &buckets.expired),
        ("expiring_items.csv", &buckets.expiring_soon),
        ("fresh_items.csv", &buckets.fresh),
    ];

    let mut written = Vec::with_capacity(slices.len());

    for (file_name, rows) in slices {
        let path = dir.join(file_name);
        let mut writer = csv::Writer::from_path(&path).map_err(csv_error)?;
        writer
            .write_record(["item", "quantity", "expiration_date", "category"])
            .map_err(csv_error)?;

        for row in rows {
            writer
                .write_record([
                    row.item.as_str(),
                    &row.quantity.to_string(),
                    &row.expiration_date.to_string(),
                    row.category.as_str(),
                ])
                .map_err(csv_error)?;
        }

        writer.flush()?;
        debug!(path = %path.display(), rows = rows.len(), "Wrote bucket slice");
        written.push(path);
    }

    Ok(written)
}

fn csv_error(e: csv::Error) -> Error {
    match e.into_kind() {
        csv::ErrorKind::Io(io) => Error::Io(io),
        other => Error::Internal(format!("csv write error: {other:?}")),
    }
}
