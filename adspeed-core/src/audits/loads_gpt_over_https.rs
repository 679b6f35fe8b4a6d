use super::{GPT_NOT_REQUESTED, plural};
use crate::audit::{Audit, AuditHost, AuditMeta, AuditOutcome, ScoreDisplayMode, score_binary};
use crate::classify::is_gpt_tag;
use crate::timing::matching_records;
use adspeed_records::{NetworkRecord, ParsedUrl};
use tracing::warn;

/// Every GPT tag request must be made over HTTPS.
#[derive(Default)]
pub struct LoadsGptOverHttps;

impl Audit for LoadsGptOverHttps {
    fn meta(&self) -> AuditMeta {
        AuditMeta {
            id: "loads-gpt-over-https",
            title: "Uses HTTPS to load GPT",
            failure_title: "Use HTTPS to load GPT",
            description: "For privacy and security, always load GPT over HTTPS. \
                Insecure pages should explicitly request the GPT script securely.",
            group: "ads-best-practices",
            score_display_mode: ScoreDisplayMode::Binary,
        }
    }

    fn audit(&self, records: &[NetworkRecord], host: &dyn AuditHost) -> AuditOutcome {
        let tag_urls: Vec<ParsedUrl> = matching_records(records, is_gpt_tag)
            .filter_map(|r| r.parsed_url().ok())
            .collect();

        if tag_urls.is_empty() {
            return host.not_applicable(GPT_NOT_REQUESTED);
        }

        let insecure: Vec<&ParsedUrl> = tag_urls.iter().filter(|u| !u.is_secure()).collect();
        for url in &insecure {
            warn!("GPT loaded over insecure transport: {}", url);
        }

        score_binary(
            insecure.is_empty(),
            insecure.len() as f64,
            plural(insecure.len(), "insecure request", "insecure requests"),
        )
    }
}
