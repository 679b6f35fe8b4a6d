use super::{GPT_NOT_REQUESTED, plural};
use crate::audit::{Audit, AuditHost, AuditMeta, AuditOutcome, ScoreDisplayMode, score_binary};
use crate::classify::is_gpt_tag;
use crate::timing::matching_records;
use adspeed_records::NetworkRecord;

/// The GPT tag should be loaded exactly once per page.
#[derive(Default)]
pub struct DuplicateTags;

impl Audit for DuplicateTags {
    fn meta(&self) -> AuditMeta {
        AuditMeta {
            id: "duplicate-tags",
            title: "No duplicate tags are loaded",
            failure_title: "Load tags only once",
            description: "Loading a tag more than once in the same page is \
                redundant and adds overhead without benefit.",
            group: "ads-best-practices",
            score_display_mode: ScoreDisplayMode::Binary,
        }
    }

    fn audit(&self, records: &[NetworkRecord], host: &dyn AuditHost) -> AuditOutcome {
        let loads = matching_records(records, is_gpt_tag).count();
        if loads == 0 {
            return host.not_applicable(GPT_NOT_REQUESTED);
        }

        score_binary(loads == 1, loads as f64, plural(loads, "tag loaded", "tags loaded"))
    }
}
