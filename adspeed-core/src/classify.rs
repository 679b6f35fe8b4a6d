// Resource classification for ad-related requests

use adspeed_records::ParsedUrl;
use serde::Serialize;

/// Hosts (and their subdomains) that serve Google ads.
pub const GOOGLE_ADS_HOSTS: [&str; 2] = ["doubleclick.net", "googlesyndication.com"];

pub const AD_REQUEST_PATHS: [&str; 1] = ["/gampad/ads"];

pub const IMPRESSION_PATHS: [&str; 2] = ["/pcs/view", "/pagead/adview"];

pub const GPT_TAG_PATH: &str = "/tag/js/gpt.js";

/// Every predicate evaluated for one URL. Predicates are independent, so any
/// combination of flags can be set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub google_ads: bool,
    pub ad_request: bool,
    pub impression: bool,
    pub gpt_tag: bool,
}

impl Classification {
    pub fn is_ad_related(&self) -> bool {
        self.google_ads || self.ad_request || self.impression || self.gpt_tag
    }

    pub fn labels(&self) -> Vec<&'static str> {
        let mut labels = Vec::new();
        if self.google_ads {
            labels.push("google-ads");
        }
        if self.ad_request {
            labels.push("ad-request");
        }
        if self.impression {
            labels.push("impression");
        }
        if self.gpt_tag {
            labels.push("gpt-tag");
        }
        labels
    }
}

/// `host` equals `base` or ends with `.{base}`. The dot boundary keeps
/// `notdoubleclick.net` from matching `doubleclick.net`.
fn host_is_subdomain_of(host: &str, base: &str) -> bool {
    let host = host.trim_end_matches('.');

    if host.eq_ignore_ascii_case(base) {
        return true;
    }
    if host.len() <= base.len() {
        return false;
    }

    let dot_pos = host.len() - base.len() - 1;
    host.as_bytes().get(dot_pos) == Some(&b'.')
        && host
            .get(dot_pos + 1..)
            .is_some_and(|suffix| suffix.eq_ignore_ascii_case(base))
}

pub fn is_google_ads(url: &ParsedUrl) -> bool {
    GOOGLE_ADS_HOSTS
        .iter()
        .any(|base| host_is_subdomain_of(url.host(), base))
}

pub fn has_ad_request_path(url: &ParsedUrl) -> bool {
    AD_REQUEST_PATHS
        .iter()
        .any(|pattern| url.path().contains(pattern))
}

pub fn has_impression_path(url: &ParsedUrl) -> bool {
    IMPRESSION_PATHS
        .iter()
        .any(|pattern| url.path().contains(pattern))
}

/// The GPT loader script, regardless of host, query or fragment.
pub fn is_gpt_tag(url: &ParsedUrl) -> bool {
    url.path().ends_with(GPT_TAG_PATH)
}

/// An ad request sent to a Google ads host.
pub fn is_ad_request(url: &ParsedUrl) -> bool {
    is_google_ads(url) && has_ad_request_path(url)
}

pub fn classify(url: &ParsedUrl) -> Classification {
    Classification {
        google_ads: is_google_ads(url),
        ad_request: has_ad_request_path(url),
        impression: has_impression_path(url),
        gpt_tag: is_gpt_tag(url),
    }
}
