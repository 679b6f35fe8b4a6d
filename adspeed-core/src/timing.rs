// Timing extraction from an unordered set of network records
//
// `None` means the signal is absent and the calling audit is not applicable.

use crate::classify::{is_ad_request, is_gpt_tag};
use adspeed_records::{NetworkRecord, ParsedUrl};
use tracing::debug;

/// Record times are seconds; audits report milliseconds.
pub const SECONDS_TO_MS: f64 = 1000.0;

/// Successful records whose URL parses and satisfies `predicate`.
/// Unparseable URLs are skipped.
pub fn matching_records<'a, F>(
    records: &'a [NetworkRecord],
    predicate: F,
) -> impl Iterator<Item = &'a NetworkRecord>
where
    F: Fn(&ParsedUrl) -> bool + 'a,
{
    records
        .iter()
        .filter(|record| record.is_successful())
        .filter(move |record| match record.parsed_url() {
            Ok(url) => predicate(&url),
            Err(e) => {
                debug!("Skipping record with unparseable URL: {}", e);
                false
            }
        })
}

fn earliest(times: impl Iterator<Item = f64>) -> Option<f64> {
    times.fold(None, |acc, t| match acc {
        Some(best) if best <= t => Some(best),
        _ => Some(t),
    })
}

/// Start time of the main page request.
///
/// The earliest successful document record wins. When the collection has
/// successful records but none is typed as a document, the earliest
/// successful record stands in for the navigation.
pub fn page_start_time(records: &[NetworkRecord]) -> Option<f64> {
    let document_start = earliest(
        records
            .iter()
            .filter(|r| r.is_successful() && r.is_document())
            .map(|r| r.start_time),
    );

    let start = document_start.or_else(|| {
        earliest(
            records
                .iter()
                .filter(|r| r.is_successful())
                .map(|r| r.start_time),
        )
    });

    debug!("Page start time: {:?}", start);
    start
}

/// End time of the first successful GPT tag load. Later duplicate loads are
/// not credited.
pub fn tag_end_time(records: &[NetworkRecord]) -> Option<f64> {
    let end = earliest(matching_records(records, is_gpt_tag).map(|r| r.end_time));
    debug!("Tag end time: {:?}", end);
    end
}

/// Start time of the first successful ad request.
pub fn ad_request_start_time(records: &[NetworkRecord]) -> Option<f64> {
    let start = earliest(matching_records(records, is_ad_request).map(|r| r.start_time));
    debug!("Ad request start time: {:?}", start);
    start
}

/// Milliseconds between two record timestamps.
pub fn elapsed_ms(from: f64, to: f64) -> f64 {
    (to - from) * SECONDS_TO_MS
}
