// Audit thresholds, optionally loaded from a JSON settings file

use crate::error::{AuditError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

/// Control points of the host's log-normal scoring curve, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Thresholds {
    /// Point of diminishing returns.
    pub podr: f64,
    pub median: f64,
}

impl Thresholds {
    pub const fn new(podr: f64, median: f64) -> Self {
        Self { podr, median }
    }

    fn validate(&self, audit_id: &str) -> Result<()> {
        if self.podr.is_nan() || self.podr <= 0.0 {
            return Err(AuditError::InvalidSettings(format!(
                "{}: podr must be positive (got {})",
                audit_id, self.podr
            )));
        }
        if self.median.is_nan() || self.median <= self.podr {
            return Err(AuditError::InvalidSettings(format!(
                "{}: median ({}) must be greater than podr ({})",
                audit_id, self.median, self.podr
            )));
        }
        Ok(())
    }

    fn merge(self, overrides: ThresholdsOverride) -> Self {
        Self {
            podr: overrides.podr.unwrap_or(self.podr),
            median: overrides.median.unwrap_or(self.median),
        }
    }
}

/// A settings file entry may name only one of the two control points.
#[derive(Debug, Default, Deserialize)]
struct ThresholdsOverride {
    podr: Option<f64>,
    median: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
struct SettingsFile {
    tag_load_time: ThresholdsOverride,
    ad_request_from_page_start: ThresholdsOverride,
    ad_request_from_tag_load: ThresholdsOverride,
    pass_threshold: Option<f64>,
}

impl From<SettingsFile> for AuditSettings {
    fn from(file: SettingsFile) -> Self {
        let defaults = AuditSettings::default();
        Self {
            tag_load_time: defaults.tag_load_time.merge(file.tag_load_time),
            ad_request_from_page_start: defaults
                .ad_request_from_page_start
                .merge(file.ad_request_from_page_start),
            ad_request_from_tag_load: defaults
                .ad_request_from_tag_load
                .merge(file.ad_request_from_tag_load),
            pass_threshold: file.pass_threshold.unwrap_or(defaults.pass_threshold),
        }
    }
}

/// Fields missing from a settings file, including a single missing `podr`
/// or `median`, keep their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "SettingsFile", rename_all = "kebab-case")]
pub struct AuditSettings {
    pub tag_load_time: Thresholds,
    pub ad_request_from_page_start: Thresholds,
    pub ad_request_from_tag_load: Thresholds,
    /// Scores at or above this are reported as a full pass.
    pub pass_threshold: f64,
}

impl Default for AuditSettings {
    fn default() -> Self {
        Self {
            tag_load_time: Thresholds::new(500.0, 1000.0),
            ad_request_from_page_start: Thresholds::new(2000.0, 4000.0),
            ad_request_from_tag_load: Thresholds::new(1000.0, 2000.0),
            pass_threshold: 0.9,
        }
    }
}

impl AuditSettings {
    pub fn from_json(content: &str) -> Result<Self> {
        let settings: AuditSettings = serde_json::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from `path`. A leading `~` is expanded.
    pub fn load(path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(path);
        let path = Path::new(expanded.as_ref());
        info!("Loading audit settings from {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn validate(&self) -> Result<()> {
        self.tag_load_time.validate("tag-load-time")?;
        self.ad_request_from_page_start
            .validate("ad-request-from-page-start")?;
        self.ad_request_from_tag_load
            .validate("ad-request-from-tag-load")?;
        if !(0.0..=1.0).contains(&self.pass_threshold) {
            return Err(AuditError::InvalidSettings(format!(
                "pass-threshold must be within [0, 1] (got {})",
                self.pass_threshold
            )));
        }
        Ok(())
    }
}
