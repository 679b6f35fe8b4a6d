pub mod ad_request_from_page_start;
pub mod ad_request_from_tag_load;
pub mod duplicate_tags;
pub mod loads_gpt_over_https;
pub mod tag_load_time;

pub use ad_request_from_page_start::AdRequestFromPageStart;
pub use ad_request_from_tag_load::AdRequestFromTagLoad;
pub use duplicate_tags::DuplicateTags;
pub use loads_gpt_over_https::LoadsGptOverHttps;
pub use tag_load_time::TagLoadTime;

pub const NO_SUCCESSFUL_RECORDS: &str = "No successful network records.";
pub const NO_TAG_LOADED: &str = "No tag loaded.";
pub const NO_ADS_REQUESTED: &str = "No ads requested.";
pub const GPT_NOT_REQUESTED: &str = "GPT not requested.";
pub const AD_REQUESTED_BEFORE_TAG: &str = "Ad requested before tag loaded.";
pub const EVENTS_OUT_OF_ORDER: &str = "Timing events out of order.";

fn plural(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}
