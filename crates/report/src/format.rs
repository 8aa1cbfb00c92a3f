//! Markdown rendering for bucket tables and the report skeleton.
//!
//! Column order is fixed: item, quantity, expiration_date, category.
//! Empty buckets still render their section so the reader can see the
//! bucket was evaluated.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use shelfwatch_core::inventory::{Bucket, ExpirationBuckets, InventoryRow};

/// Parameters a rendered report is annotated with.
#[derive(Debug, Clone)]
pub struct ReportParams {
    /// Reference date expiration is evaluated against
    pub today: NaiveDate,

    /// Lookahead window in days for the expiring-soon bucket
    pub window_days: u32,

    /// Wall-clock instant the report was generated
    pub generated_at: DateTime<Utc>,

    /// Per-table row cap; `None` renders every row
    pub table_limit: Option<usize>,
}

/// Section heading for a bucket.
pub fn bucket_title(bucket: Bucket, window_days: u32) -> String {
    match bucket {
        Bucket::Expired => "Expired Items".into(),
        Bucket::ExpiringSoon => format!("Expiring Within {window_days} Days"),
        Bucket::Fresh => "Sufficient Shelf Life".into(),
    }
}

/// Render one bucket as a markdown table under a `###` heading.
///
/// Tables longer than `limit` are truncated with a "showing first L of N"
/// marker in the heading.
pub fn render_table(rows: &[InventoryRow], title: &str, limit: Option<usize>) -> String {
    let mut heading = format!("### {title}");
    let shown = match limit {
        Some(l) if rows.len() > l => {
            heading.push_str(&format!(" (showing first {l} rows of {})", rows.len()));
            &rows[..l]
        }
        _ => rows,
    };

    let mut out = heading;
    out.push_str("\n\n");
    out.push_str("| item | quantity | expiration_date | category |\n");
    out.push_str("| --- | --- | --- | --- |\n");

    if shown.is_empty() {
        out.push_str("\n_No items._\n");
        return out;
    }

    for row in shown {
        out.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            row.item, row.quantity, row.expiration_date, row.category
        ));
    }
    out
}

/// Render the full report body: header, three tables, summary.
///
/// The narrative section is appended separately by the builder.
pub fn render_report(buckets: &ExpirationBuckets, params: &ReportParams) -> String {
    let mut out = String::new();

    out.push_str("# Restaurant Inventory Expiration Report\n\n");
    out.push_str(&format!(
        "_Generated: {}_\n\n",
        params.generated_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    ));
    out.push_str(&format!("- Reference date: {}\n", params.today));
    out.push_str(&format!(
        "- Expiring-soon window: {} days\n\n",
        params.window_days
    ));

    for bucket in [Bucket::Expired, Bucket::ExpiringSoon, Bucket::Fresh] {
        out.push_str(&render_table(
            buckets.rows(bucket),
            &bucket_title(bucket, params.window_days),
            params.table_limit,
        ));
        out.push('\n');
    }

    out.push_str("## Summary\n\n");
    out.push_str(&format!(
        "Counts: {} expired, {} expiring within {} days, {} fresh.\n",
        buckets.expired.len(),
        buckets.expiring_soon.len(),
        params.window_days,
        buckets.fresh.len()
    ));
    out.push_str(&format!(
        "Units on hand: {} expired, {} expiring soon, {} fresh.\n",
        buckets.units(Bucket::Expired),
        buckets.units(Bucket::ExpiringSoon),
        buckets.units(Bucket::Fresh)
    ));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn params() -> ReportParams {
        ReportParams {
            today: date("2025-10-18"),
            window_days: 7,
            generated_at: Utc.with_ymd_and_hms(2025, 10, 18, 9, 30, 0).unwrap(),
            table_limit: None,
        }
    }

    fn sample_buckets() -> ExpirationBuckets {
        ExpirationBuckets {
            expired: vec![InventoryRow::new("Milk", 8, date("2025-10-15"), "Dairy")],
            expiring_soon: vec![InventoryRow::new("Eggs", 30, date("2025-10-20"), "Protein")],
            fresh: vec![InventoryRow::new("Rice", 4, date("2026-03-01"), "Dry Goods")],
        }
    }

    #[test]
    fn table_renders_rows_in_fixed_column_order() {
        let rows = vec![InventoryRow::new("Milk", 8, date("2025-10-15"), "Dairy")];
        let table = render_table(&rows, "Expired Items", None);
        assert!(table.contains("### Expired Items"));
        assert!(table.contains("| item | quantity | expiration_date | category |"));
        assert!(table.contains("| Milk | 8 | 2025-10-15 | Dairy |"));
    }

    #[test]
    fn empty_table_renders_header_and_marker() {
        let table = render_table(&[], "Expired Items", None);
        assert!(table.contains("| item | quantity | expiration_date | category |"));
        assert!(table.contains("_No items._"));
    }

    #[test]
    fn table_limit_truncates_with_marker() {
        let rows: Vec<_> = (0..5)
            .map(|i| InventoryRow::new(format!("item-{i}"), 1, date("2025-10-15"), "Test"))
            .collect();
        let table = render_table(&rows, "Expired Items", Some(2));
        assert!(table.contains("(showing first 2 rows of 5)"));
        assert!(table.contains("item-0"));
        assert!(table.contains("item-1"));
        assert!(!table.contains("item-2"));
    }

    #[test]
    fn table_limit_larger_than_rows_is_a_noop() {
        let rows = vec![InventoryRow::new("Milk", 8, date("2025-10-15"), "Dairy")];
        let table = render_table(&rows, "Expired Items", Some(50));
        assert!(!table.contains("showing first"));
        assert!(table.contains("Milk"));
    }

    #[test]
    fn report_contains_header_tables_and_summary() {
        let report = render_report(&sample_buckets(), &params());
        assert!(report.contains("# Restaurant Inventory Expiration Report"));
        assert!(report.contains("_Generated: 2025-10-18T09:30:00Z_"));
        assert!(report.contains("- Reference date: 2025-10-18"));
        assert!(report.contains("- Expiring-soon window: 7 days"));
        assert!(report.contains("### Expired Items"));
        assert!(report.contains("### Expiring Within 7 Days"));
        assert!(report.contains("### Sufficient Shelf Life"));
        assert!(report.contains("Counts: 1 expired, 1 expiring within 7 days, 1 fresh."));
        assert!(report.contains("Units on hand: 8 expired, 30 expiring soon, 4 fresh."));
    }

    #[test]
    fn empty_inventory_still_renders_three_tables_with_zero_counts() {
        let report = render_report(&ExpirationBuckets::default(), &params());
        assert_eq!(report.matches("_No items._").count(), 3);
        assert!(report.contains("Counts: 0 expired, 0 expiring within 7 days, 0 fresh."));
    }

    #[test]
    fn window_size_flows_into_bucket_title() {
        assert_eq!(bucket_title(Bucket::ExpiringSoon, 3), "Expiring Within 3 Days");
        assert_eq!(bucket_title(Bucket::Expired, 3), "Expired Items");
    }
}
