use super::{AD_REQUESTED_BEFORE_TAG, NO_ADS_REQUESTED, NO_TAG_LOADED};
use crate::audit::{Audit, AuditHost, AuditMeta, AuditOutcome, ScoreDisplayMode, score_timing};
use crate::settings::{AuditSettings, Thresholds};
use crate::timing::{ad_request_start_time, elapsed_ms, tag_end_time};
use adspeed_records::NetworkRecord;
use tracing::{debug, warn};

/// Time from the GPT tag finishing until the first ad request is sent.
pub struct AdRequestFromTagLoad {
    thresholds: Thresholds,
    pass_threshold: f64,
}

impl AdRequestFromTagLoad {
    pub fn new(settings: &AuditSettings) -> Self {
        Self {
            thresholds: settings.ad_request_from_tag_load,
            pass_threshold: settings.pass_threshold,
        }
    }
}

impl Default for AdRequestFromTagLoad {
    fn default() -> Self {
        Self::new(&AuditSettings::default())
    }
}

impl Audit for AdRequestFromTagLoad {
    fn meta(&self) -> AuditMeta {
        AuditMeta {
            id: "ad-request-from-tag-load",
            title: "Ad request latency (from tag load)",
            failure_title: "Reduce latency of first ad request (from tag load)",
            description: "This measures the elapsed time from when the Google \
                Publisher Tag loads until the first ad request is made.",
            group: "measurements",
            score_display_mode: ScoreDisplayMode::Numeric,
        }
    }

    fn audit(&self, records: &[NetworkRecord], host: &dyn AuditHost) -> AuditOutcome {
        let Some(tag_end) = tag_end_time(records) else {
            return host.not_applicable(NO_TAG_LOADED);
        };
        let Some(ad_start) = ad_request_start_time(records) else {
            return host.not_applicable(NO_ADS_REQUESTED);
        };
        // The first ad request came from another tag, not this one.
        if ad_start < tag_end {
            warn!(
                "First ad request at {}s precedes tag load end at {}s",
                ad_start, tag_end
            );
            return host.not_applicable(AD_REQUESTED_BEFORE_TAG);
        }

        let latency = elapsed_ms(tag_end, ad_start);
        debug!("Ad request latency from tag load: {} ms", latency);

        score_timing(
            host,
            latency,
            self.thresholds.podr,
            self.thresholds.median,
            self.pass_threshold,
        )
    }
}
