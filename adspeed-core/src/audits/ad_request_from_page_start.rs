use super::{NO_ADS_REQUESTED, NO_SUCCESSFUL_RECORDS};
use crate::audit::{Audit, AuditHost, AuditMeta, AuditOutcome, ScoreDisplayMode, score_timing};
use crate::settings::{AuditSettings, Thresholds};
use crate::timing::{ad_request_start_time, elapsed_ms, page_start_time};
use adspeed_records::NetworkRecord;
use tracing::debug;

/// Time from page start until the first ad request is sent.
pub struct AdRequestFromPageStart {
    thresholds: Thresholds,
    pass_threshold: f64,
}

impl AdRequestFromPageStart {
    pub fn new(settings: &AuditSettings) -> Self {
        Self {
            thresholds: settings.ad_request_from_page_start,
            pass_threshold: settings.pass_threshold,
        }
    }
}

impl Default for AdRequestFromPageStart {
    fn default() -> Self {
        Self::new(&AuditSettings::default())
    }
}

impl Audit for AdRequestFromPageStart {
    fn meta(&self) -> AuditMeta {
        AuditMeta {
            id: "ad-request-from-page-start",
            title: "Ad request latency (from page start)",
            failure_title: "Reduce latency of first ad request",
            description: "This measures the elapsed time from the start of page \
                load until the first ad request is made.",
            group: "measurements",
            score_display_mode: ScoreDisplayMode::Numeric,
        }
    }

    fn audit(&self, records: &[NetworkRecord], host: &dyn AuditHost) -> AuditOutcome {
        let Some(page_start) = page_start_time(records) else {
            return host.not_applicable(NO_SUCCESSFUL_RECORDS);
        };
        let Some(ad_start) = ad_request_start_time(records) else {
            return host.not_applicable(NO_ADS_REQUESTED);
        };

        let latency = elapsed_ms(page_start, ad_start);
        debug!("Ad request latency from page start: {} ms", latency);

        score_timing(
            host,
            latency,
            self.thresholds.podr,
            self.thresholds.median,
            self.pass_threshold,
        )
    }
}
