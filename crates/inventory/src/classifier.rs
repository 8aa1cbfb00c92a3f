//! Expiration classifier.
//!
//! Single pass over the loaded rows: each row goes into exactly one bucket,
//! relative order within a bucket matches the load order. No error
//! conditions — malformed input never reaches this point.

use chrono::NaiveDate;
use shelfwatch_core::inventory::{Bucket, ExpirationBuckets, InventoryRow};
use tracing::debug;

/// Partition rows into expired / expiring-soon / fresh buckets.
pub fn classify(
    rows: Vec<InventoryRow>,
    today: NaiveDate,
    window_days: u32,
) -> ExpirationBuckets {
    let mut buckets = ExpirationBuckets::default();

    for row in rows {
        match Bucket::of(row.expiration_date, today, window_days) {
            Bucket::Expired => buckets.expired.push(row),
            Bucket::ExpiringSoon => buckets.expiring_soon.push(row),
            Bucket::Fresh => buckets.fresh.push(row),
        }
    }

    debug!(
        expired = buckets.expired.len(),
        expiring_soon = buckets.expiring_soon.len(),
        fresh = buckets.fresh.len(),
        %today,
        window_days,
        "Classified inventory"
    );

    buckets
}
