use super::{NO_SUCCESSFUL_RECORDS, NO_TAG_LOADED};
use crate::audit::{Audit, AuditHost, AuditMeta, AuditOutcome, ScoreDisplayMode, score_timing};
use crate::settings::{AuditSettings, Thresholds};
use crate::timing::{elapsed_ms, page_start_time, tag_end_time};
use adspeed_records::NetworkRecord;
use tracing::debug;

/// Time for the GPT tag to load, relative to page start.
pub struct TagLoadTime {
    thresholds: Thresholds,
    pass_threshold: f64,
}

impl TagLoadTime {
    pub fn new(settings: &AuditSettings) -> Self {
        Self {
            thresholds: settings.tag_load_time,
            pass_threshold: settings.pass_threshold,
        }
    }
}

impl Default for TagLoadTime {
    fn default() -> Self {
        Self::new(&AuditSettings::default())
    }
}

impl Audit for TagLoadTime {
    fn meta(&self) -> AuditMeta {
        AuditMeta {
            id: "tag-load-time",
            title: "Tag load time",
            failure_title: "Reduce tag load time",
            description: "This measures the time for the Google Publisher Tag's \
                implementation script to load after the page loads.",
            group: "measurements",
            score_display_mode: ScoreDisplayMode::Numeric,
        }
    }

    fn audit(&self, records: &[NetworkRecord], host: &dyn AuditHost) -> AuditOutcome {
        let Some(page_start) = page_start_time(records) else {
            return host.not_applicable(NO_SUCCESSFUL_RECORDS);
        };
        let Some(tag_end) = tag_end_time(records) else {
            return host.not_applicable(NO_TAG_LOADED);
        };

        let tag_load_time = elapsed_ms(page_start, tag_end);
        debug!("Tag load time: {} ms", tag_load_time);

        score_timing(
            host,
            tag_load_time,
            self.thresholds.podr,
            self.thresholds.median,
            self.pass_threshold,
        )
    }
}
