//! Report assembly pipeline.
//!
//! Renders the bucket tables and summary, then appends the narrative
//! section. The narrative step is recoverable: any provider error turns
//! into an "unavailable" note and the report is returned anyway.

use crate::format::{ReportParams, render_report};
use crate::prompt::build_prompt;
use shelfwatch_core::inventory::ExpirationBuckets;
use shelfwatch_core::narrative::{NarrativeProvider, NarrativeRequest};
use tracing::{info, warn};

/// Request-shaping settings for the narrative step.
#[derive(Debug, Clone)]
pub struct NarrativeOptions {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: Option<u32>,
    /// Rows per bucket table included in the prompt (0 = uncapped)
    pub prompt_rows: usize,
}

/// Assemble the final report document.
///
/// With `narrative == None` the recommendations section is omitted
/// entirely. With a provider, the section carries either the model's text
/// verbatim or a note that recommendations are unavailable. This function
/// never fails: narrative errors are logged and absorbed.
pub async fn build_report(
    buckets: &ExpirationBuckets,
    params: &ReportParams,
    narrative: Option<(&dyn NarrativeProvider, &NarrativeOptions)>,
) -> String {
    let mut report = render_report(buckets, params);

    let Some((provider, options)) = narrative else {
        return report;
    };

    report.push_str("\n## Recommendations\n\n");

    let prompt = build_prompt(buckets, params, options.prompt_rows);
    let mut request = NarrativeRequest::new(&options.model, prompt);
    request.temperature = options.temperature;
    request.max_tokens = options.max_tokens;

    info!(
        provider = provider.name(),
        model = %options.model,
        "Requesting narrative recommendations"
    );

    match provider.generate(request).await {
        Ok(response) if response.text.trim().is_empty() => {
            warn!(provider = provider.name(), "Provider returned an empty narrative");
            report.push_str("_Recommendations are unavailable: the provider returned an empty response._\n");
        }
        Ok(response) => {
            report.push_str(response.text.trim());
            report.push('\n');
        }
        Err(e) => {
            warn!(provider = provider.name(), error = %e, "Narrative generation failed");
            report.push_str(&format!("_Recommendations are unavailable: {e}_\n"));
        }
    }

    report
}
