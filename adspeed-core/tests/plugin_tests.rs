// Tests for the audit registry and settings

use adspeed_core::plugin::{audits, find, group_title, groups};
use adspeed_core::{AuditError, AuditHost, AuditOutcome, AuditSettings, run_audits};
use adspeed_records::{NetworkRecord, ResourceType};
use std::io::Write;
use tempfile::NamedTempFile;

struct FixedHost(f64);

impl AuditHost for FixedHost {
    fn compute_log_normal_score(&self, _value: f64, _podr: f64, _median: f64) -> f64 {
        self.0
    }
}

fn page_with_tag() -> Vec<NetworkRecord> {
    vec![
        NetworkRecord::new("https://example.com/".to_string(), 0.1, 0.2)
            .with_resource_type(ResourceType::Document),
        NetworkRecord::new(
            "https://securepubads.g.doubleclick.net/tag/js/gpt.js".to_string(),
            0.15,
            0.35,
        ),
    ]
}

// ============================================================================
// Registry Tests
// ============================================================================

#[test]
fn test_audits_registered_in_order() {
    let ids: Vec<&str> = audits(&AuditSettings::default())
        .iter()
        .map(|a| a.meta().id)
        .collect();

    assert_eq!(
        ids,
        vec![
            "tag-load-time",
            "ad-request-from-tag-load",
            "ad-request-from-page-start",
            "loads-gpt-over-https",
            "duplicate-tags",
        ]
    );
}

#[test]
fn test_every_audit_belongs_to_a_known_group() {
    for audit in audits(&AuditSettings::default()) {
        let meta = audit.meta();
        assert!(group_title(meta.group).is_some(), "{} has unknown group", meta.id);
    }
}

#[test]
fn test_groups() {
    assert_eq!(groups().len(), 3);
    assert_eq!(group_title("measurements"), Some("Measurements"));
    assert_eq!(group_title("ads-best-practices"), Some("Best Practices"));
    assert_eq!(group_title("nope"), None);
}

#[test]
fn test_find_known_audit() {
    let audit = find("duplicate-tags", &AuditSettings::default()).unwrap();
    assert_eq!(audit.meta().id, "duplicate-tags");
}

#[test]
fn test_find_unknown_audit() {
    let result = find("ads-in-viewport", &AuditSettings::default());
    assert!(matches!(result, Err(AuditError::UnknownAudit(id)) if id == "ads-in-viewport"));
}

// ============================================================================
// Run Tests
// ============================================================================

#[test]
fn test_run_all_audits() {
    let results = run_audits(&page_with_tag(), &FixedHost(0.95), &AuditSettings::default(), &[])
        .unwrap();

    assert_eq!(results.len(), 5);
    assert_eq!(results[0].id, "tag-load-time");
    assert_eq!(results[0].outcome.score(), Some(1.0));
    assert_eq!(
        results[1].outcome,
        AuditOutcome::not_applicable("No ads requested.")
    );
}

#[test]
fn test_run_selected_audits() {
    let selected = vec!["duplicate-tags".to_string()];
    let results = run_audits(&page_with_tag(), &FixedHost(0.5), &AuditSettings::default(), &selected)
        .unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "duplicate-tags");
}

#[test]
fn test_run_failing_audit_uses_failure_title() {
    let selected = vec!["tag-load-time".to_string()];
    let results = run_audits(&page_with_tag(), &FixedHost(0.3), &AuditSettings::default(), &selected)
        .unwrap();

    assert_eq!(results[0].title, "Reduce tag load time");
}

#[test]
fn test_run_unknown_audit_fails() {
    let selected = vec!["bogus".to_string()];
    let result = run_audits(&page_with_tag(), &FixedHost(0.5), &AuditSettings::default(), &selected);

    assert!(result.is_err());
}

#[test]
fn test_result_serializes_flat() {
    let results = run_audits(&[], &FixedHost(0.5), &AuditSettings::default(), &[]).unwrap();
    let json = serde_json::to_value(&results[0]).unwrap();

    assert_eq!(json["id"], "tag-load-time");
    assert_eq!(json["status"], "not-applicable");
    assert_eq!(json["explanation"], "No successful network records.");
}

// ============================================================================
// Settings Tests
// ============================================================================

#[test]
fn test_default_settings() {
    let settings = AuditSettings::default();

    assert_eq!(settings.tag_load_time.podr, 500.0);
    assert_eq!(settings.tag_load_time.median, 1000.0);
    assert_eq!(settings.pass_threshold, 0.9);
    assert!(settings.validate().is_ok());
}

#[test]
fn test_settings_partial_json_uses_defaults() {
    let settings =
        AuditSettings::from_json(r#"{"tag-load-time": {"podr": 400, "median": 800}}"#).unwrap();

    assert_eq!(settings.tag_load_time.podr, 400.0);
    assert_eq!(settings.ad_request_from_tag_load.median, 2000.0);
}

#[test]
fn test_settings_single_threshold_override() {
    let settings = AuditSettings::from_json(r#"{"tag-load-time": {"podr": 300}}"#).unwrap();

    assert_eq!(settings.tag_load_time.podr, 300.0);
    assert_eq!(settings.tag_load_time.median, 1000.0);

    let settings =
        AuditSettings::from_json(r#"{"ad-request-from-tag-load": {"median": 5000}}"#).unwrap();

    assert_eq!(settings.ad_request_from_tag_load.podr, 1000.0);
    assert_eq!(settings.ad_request_from_tag_load.median, 5000.0);
}

#[test]
fn test_settings_single_override_still_validated() {
    let result = AuditSettings::from_json(r#"{"tag-load-time": {"podr": 1500}}"#);
    assert!(matches!(result, Err(AuditError::InvalidSettings(_))));
}

#[test]
fn test_settings_reject_non_positive_podr() {
    let result = AuditSettings::from_json(r#"{"tag-load-time": {"podr": -5, "median": 800}}"#);
    assert!(matches!(result, Err(AuditError::InvalidSettings(_))));

    let zero = AuditSettings::from_json(r#"{"tag-load-time": {"podr": 0}}"#);
    assert!(matches!(zero, Err(AuditError::InvalidSettings(_))));
}

#[test]
fn test_settings_reject_nan_thresholds() {
    let mut settings = AuditSettings::default();
    settings.tag_load_time.podr = f64::NAN;
    assert!(matches!(settings.validate(), Err(AuditError::InvalidSettings(_))));

    let mut settings = AuditSettings::default();
    settings.ad_request_from_page_start.median = f64::NAN;
    assert!(matches!(settings.validate(), Err(AuditError::InvalidSettings(_))));
}

#[test]
fn test_settings_reject_inverted_thresholds() {
    let result = AuditSettings::from_json(r#"{"tag-load-time": {"podr": 900, "median": 800}}"#);
    assert!(matches!(result, Err(AuditError::InvalidSettings(_))));
}

#[test]
fn test_settings_reject_pass_threshold_out_of_range() {
    let result = AuditSettings::from_json(r#"{"pass-threshold": 1.5}"#);
    assert!(matches!(result, Err(AuditError::InvalidSettings(_))));
}

#[test]
fn test_settings_load_from_file() -> Result<(), Box<dyn std::error::Error>> {
    let mut temp_file = NamedTempFile::new()?;
    write!(temp_file, r#"{{"pass-threshold": 0.8}}"#)?;

    let path = temp_file.path().to_str().unwrap().to_string();
    let settings = AuditSettings::load(&path)?;

    assert_eq!(settings.pass_threshold, 0.8);
    Ok(())
}

#[test]
fn test_settings_load_missing_file() {
    let result = AuditSettings::load("/nonexistent/adspeed.json");
    assert!(matches!(result, Err(AuditError::IoError(_))));
}
