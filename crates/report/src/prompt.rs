//! Narrative prompt assembly.
//!
//! The model receives the analyst instruction followed by the locally
//! computed summary and capped bucket tables. Classification happens here,
//! not in the model; the prompt tells it to treat our numbers as ground
//! truth.

use crate::format::{ReportParams, bucket_title, render_table};
use shelfwatch_core::inventory::{Bucket, ExpirationBuckets};

/// The fixed analyst instruction sent ahead of the data.
pub const ANALYST_INSTRUCTION: &str = "You are a restaurant inventory analyst. \
Using the data below, 1) list items already expired, 2) items expiring within \
the stated window, 3) items with sufficient shelf life, 4) actionable \
recommendations (e.g., discounting, menu specials, reorder timing, storage \
tips). Return a concise, well-structured Markdown report with clear tables.";

/// Build the full prompt for a narrative request.
///
/// `prompt_rows` caps each bucket table so a large inventory cannot blow up
/// the request size.
pub fn build_prompt(
    buckets: &ExpirationBuckets,
    params: &ReportParams,
    prompt_rows: usize,
) -> String {
    let cap = if prompt_rows == 0 {
        None
    } else {
        Some(prompt_rows)
    };

    let mut out = String::from(ANALYST_INSTRUCTION);
    out.push_str("\n\n## Context (computed locally; treat as ground truth)\n");
    out.push_str(&format!("Today: {}\n", params.today));
    out.push_str(&format!("Window: {} days\n", params.window_days));
    out.push_str(&format!(
        "Counts: expired: {}, expiring within window: {}, fresh: {}\n",
        buckets.expired.len(),
        buckets.expiring_soon.len(),
        buckets.fresh.len()
    ));

    out.push_str("\n## Data slices\n");
    for bucket in [Bucket::Expired, Bucket::ExpiringSoon, Bucket::Fresh] {
        out.push_str(&render_table(
            buckets.rows(bucket),
            &bucket_title(bucket, params.window_days),
            cap,
        ));
        out.push('\n');
    }

    out
}
