//! Inventory domain types: rows, expiration buckets, and the bucketed
//! partition the classifier produces.
//!
//! These are the value objects that flow through the entire pipeline:
//! Loader reads rows → Classifier partitions them → Formatter renders the
//! partition → Narrative provider comments on it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single inventory line item.
///
/// Invariant: every field is populated; `item` is non-empty and
/// `expiration_date` is a valid calendar date. The loader enforces this at
/// parse time, so downstream code can rely on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryRow {
    /// Item identifier (e.g. "Whole Milk 1L")
    pub item: String,

    /// Units on hand
    pub quantity: u32,

    /// Calendar date the item expires (no time component)
    pub expiration_date: NaiveDate,

    /// Free-form category label (e.g. "Dairy", "Produce")
    pub category: String,
}

impl InventoryRow {
    pub fn new(
        item: impl Into<String>,
        quantity: u32,
        expiration_date: NaiveDate,
        category: impl Into<String>,
    ) -> Self {
        Self {
            item: item.into(),
            quantity,
            expiration_date,
            category: category.into(),
        }
    }
}

/// The three-way expiration class of a row relative to a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bucket {
    /// `expiration_date < today`
    Expired,
    /// `today <= expiration_date <= today + window`
    ExpiringSoon,
    /// `expiration_date > today + window`
    Fresh,
}

impl Bucket {
    /// Classify an expiration date against `today` and a lookahead window.
    ///
    /// Both window bounds are inclusive: an item expiring exactly on `today`
    /// is not yet spoiled, and an item expiring exactly `window_days` out is
    /// still "soon".
    pub fn of(expiration: NaiveDate, today: NaiveDate, window_days: u32) -> Self {
        let horizon = today + chrono::Duration::days(i64::from(window_days));
        if expiration < today {
            Bucket::Expired
        } else if expiration <= horizon {
            Bucket::ExpiringSoon
        } else {
            Bucket::Fresh
        }
    }
}

/// The classifier's output: a permutation-free partition of the input rows.
///
/// Every input row lands in exactly one bucket; relative order within each
/// bucket matches the load order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpirationBuckets {
    pub expired: Vec<InventoryRow>,
    pub expiring_soon: Vec<InventoryRow>,
    pub fresh: Vec<InventoryRow>,
}

impl ExpirationBuckets {
    /// Total number of rows across all three buckets.
    pub fn len(&self) -> usize {
        self.expired.len() + self.expiring_soon.len() + self.fresh.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The rows in a given bucket.
    pub fn rows(&self, bucket: Bucket) -> &[InventoryRow] {
        match bucket {
            Bucket::Expired => &self.expired,
            Bucket::ExpiringSoon => &self.expiring_soon,
            Bucket::Fresh => &self.fresh,
        }
    }

    /// Total units on hand in a given bucket.
    pub fn units(&self, bucket: Bucket) -> u64 {
        self.rows(bucket)
            .iter()
            .map(|r| u64::from(r.quantity))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn expiration_before_today_is_expired() {
        // Worked example: Milk expired three days before the reference date
        let bucket = Bucket::of(date("2025-10-15"), date("2025-10-18"), 7);
        assert_eq!(bucket, Bucket::Expired);
    }

    #[test]
    fn expiration_inside_window_is_expiring_soon() {
        // Worked example: Eggs expiring two days out with a 7-day window
        let bucket = Bucket::of(date("2025-10-20"), date("2025-10-18"), 7);
        assert_eq!(bucket, Bucket::ExpiringSoon);
    }

    #[test]
    fn expiration_on_today_is_expiring_soon_not_expired() {
        let bucket = Bucket::of(date("2025-10-18"), date("2025-10-18"), 7);
        assert_eq!(bucket, Bucket::ExpiringSoon);
    }

    #[test]
    fn window_upper_bound_is_inclusive() {
        let today = date("2025-10-18");
        assert_eq!(Bucket::of(date("2025-10-25"), today, 7), Bucket::ExpiringSoon);
        assert_eq!(Bucket::of(date("2025-10-26"), today, 7), Bucket::Fresh);
    }

    #[test]
    fn zero_window_only_today_is_soon() {
        let today = date("2025-10-18");
        assert_eq!(Bucket::of(today, today, 0), Bucket::ExpiringSoon);
        assert_eq!(Bucket::of(date("2025-10-19"), today, 0), Bucket::Fresh);
        assert_eq!(Bucket::of(date("2025-10-17"), today, 0), Bucket::Expired);
    }

    #[test]
    fn bucket_units_sums_quantities() {
        let buckets = ExpirationBuckets {
            expired: vec![
                InventoryRow::new("Milk", 8, date("2025-10-15"), "Dairy"),
                InventoryRow::new("Yogurt", 12, date("2025-10-14"), "Dairy"),
            ],
            ..Default::default()
        };
        assert_eq!(buckets.units(Bucket::Expired), 20);
        assert_eq!(buckets.units(Bucket::Fresh), 0);
        assert_eq!(buckets.len(), 2);
    }

    #[test]
    fn empty_buckets_report_empty() {
        let buckets = ExpirationBuckets::default();
        assert!(buckets.is_empty());
        assert_eq!(buckets.len(), 0);
    }

    #[test]
    fn row_serialization_roundtrip() {
        let row = InventoryRow::new("Eggs", 30, date("2025-10-20"), "Protein");
        let json = serde_json::to_string(&row).unwrap();
        assert!(json.contains("2025-10-20"));
        let back: InventoryRow = serde_json::from_str(&json).unwrap();
        assert_eq!(back, row);
    }
}
