// Tests for resource classification

use adspeed_core::classify::{
    classify, has_ad_request_path, has_impression_path, is_ad_request, is_gpt_tag, is_google_ads,
};
use adspeed_records::ParsedUrl;

fn url(s: &str) -> ParsedUrl {
    ParsedUrl::parse(s).unwrap()
}

// ============================================================================
// Google Ads Host Tests
// ============================================================================

#[test]
fn test_is_google_ads_doubleclick_without_subdomain() {
    assert!(is_google_ads(&url("https://doubleclick.net/gpt/js/pubads.js")));
}

#[test]
fn test_is_google_ads_googlesyndication_without_subdomain() {
    assert!(is_google_ads(&url("https://googlesyndication.com/gpt/js/pubads.js")));
}

#[test]
fn test_is_google_ads_doubleclick_with_hash_and_query() {
    assert!(is_google_ads(&url("https://www.doubleclick.net/tag/js/gpt.js?foo=bar#baz")));
}

#[test]
fn test_is_google_ads_googlesyndication_with_hash_and_query() {
    assert!(is_google_ads(&url(
        "https://www.googlesyndication.com/tag/js/gpt.js?foo=bar#baz"
    )));
}

#[test]
fn test_is_google_ads_subdomains() {
    assert!(is_google_ads(&url("https://pagead2.doubleclick.net/pcs/activeview")));
    assert!(is_google_ads(&url("https://pagead2.googlesyndication.com/pcs/activeview")));
    assert!(is_google_ads(&url("https://securepubads.g.doubleclick.net/gampad/ads")));
}

#[test]
fn test_is_google_ads_case_insensitive() {
    let parsed = ParsedUrl::new("https", "PageAd2.DoubleClick.NET", "/", None, None).unwrap();
    assert!(is_google_ads(&parsed));
}

#[test]
fn test_is_google_ads_other_host() {
    assert!(!is_google_ads(&url("https://facebook.com/foo?bar=baz#bat")));
}

#[test]
fn test_is_google_ads_lookalike_hosts() {
    assert!(!is_google_ads(&url("https://notdoubleclick.net/gampad/ads")));
    assert!(!is_google_ads(&url("https://evil-doubleclick.net/gampad/ads")));
    assert!(!is_google_ads(&url("https://doubleclick.net.evil.com/gampad/ads")));
    assert!(!is_google_ads(&url(
        "https://evil-doubleclick.net.attacker.com/gampad/ads"
    )));
    assert!(!is_google_ads(&url("https://googlesyndication.co/gampad/ads")));
}

#[test]
fn test_is_google_ads_ignores_path() {
    assert!(!is_google_ads(&url("https://example.com/doubleclick.net/gampad/ads")));
}

// ============================================================================
// Ad Request Path Tests
// ============================================================================

#[test]
fn test_has_ad_request_path() {
    assert!(has_ad_request_path(&url(
        "https://securepubads.g.doubleclick.net/gampad/ads?bar=baz"
    )));
}

#[test]
fn test_has_ad_request_path_with_surrounding_segments() {
    assert!(has_ad_request_path(&url("https://example.com/prefix/gampad/ads/suffix")));
}

#[test]
fn test_has_ad_request_path_other_path() {
    assert!(!has_ad_request_path(&url("https://googlesyndication.com/file/folder?bar=baz")));
}

#[test]
fn test_has_ad_request_path_only_in_query() {
    assert!(!has_ad_request_path(&url("https://example.com/?next=/gampad/ads")));
}

// ============================================================================
// Impression Path Tests
// ============================================================================

#[test]
fn test_has_impression_path_pcs_view() {
    assert!(has_impression_path(&url("https://googlesyndication.com/pcs/view?bar=baz")));
}

#[test]
fn test_has_impression_path_pagead_adview() {
    assert!(has_impression_path(&url("https://googlesyndication.com/pagead/adview?bar=baz")));
}

#[test]
fn test_has_impression_path_other_path() {
    assert!(!has_impression_path(&url(
        "https://googlesyndication.com/file/folder/foo?bar=baz"
    )));
}

// ============================================================================
// GPT Tag Tests
// ============================================================================

#[test]
fn test_is_gpt_tag_plain() {
    assert!(is_gpt_tag(&url("http://www.googletagservices.com/tag/js/gpt.js")));
}

#[test]
fn test_is_gpt_tag_with_hash() {
    assert!(is_gpt_tag(&url("https://www.googletagservices.com/tag/js/gpt.js#foo")));
}

#[test]
fn test_is_gpt_tag_with_query() {
    assert!(is_gpt_tag(&url("https://www.googletagservices.com/tag/js/gpt.js?foo=bar")));
}

#[test]
fn test_is_gpt_tag_with_query_and_hash() {
    assert!(is_gpt_tag(&url(
        "https://www.googletagservices.com/tag/js/gpt.js?foo=bar#baz"
    )));
}

#[test]
fn test_is_gpt_tag_other_script() {
    assert!(!is_gpt_tag(&url("https://facebook.com/foo?bar=baz")));
    assert!(!is_gpt_tag(&url("https://www.googletagservices.com/tag/js/gpt.js.map")));
    assert!(!is_gpt_tag(&url("https://securepubads.g.doubleclick.net/pagead/managed/js/gpt/pubads_impl.js")));
}

// ============================================================================
// Combined Classification Tests
// ============================================================================

#[test]
fn test_is_ad_request_requires_google_host() {
    assert!(is_ad_request(&url("https://securepubads.g.doubleclick.net/gampad/ads?iu=/1/x")));
    assert!(!is_ad_request(&url("https://example.com/gampad/ads")));
}

#[test]
fn test_classify_predicates_are_independent() {
    let result = classify(&url("https://securepubads.g.doubleclick.net/gampad/ads?bar=baz"));

    assert!(result.google_ads);
    assert!(result.ad_request);
    assert!(!result.impression);
    assert!(!result.gpt_tag);
    assert!(result.is_ad_related());
    assert_eq!(result.labels(), vec!["google-ads", "ad-request"]);
}

#[test]
fn test_classify_unrelated_url() {
    let result = classify(&url("https://example.com/index.html"));

    assert!(!result.is_ad_related());
    assert!(result.labels().is_empty());
}

#[test]
fn test_classify_is_deterministic() {
    let parsed = url("https://pagead2.googlesyndication.com/pagead/adview?ai=1");
    assert_eq!(classify(&parsed), classify(&parsed));
}
