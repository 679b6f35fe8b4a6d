// Audit contract shared by every ad-speed audit

use crate::audits::EVENTS_OUT_OF_ORDER;
use adspeed_records::NetworkRecord;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreDisplayMode {
    Numeric,
    Binary,
}

impl ScoreDisplayMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreDisplayMode::Numeric => "numeric",
            ScoreDisplayMode::Binary => "binary",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AuditMeta {
    pub id: &'static str,
    pub title: &'static str,
    pub failure_title: &'static str,
    pub description: &'static str,
    pub group: &'static str,
    pub score_display_mode: ScoreDisplayMode,
}

/// What an audit hands back to the host.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum AuditOutcome {
    /// The signal the audit needs is missing from the records.
    NotApplicable { explanation: String },
    #[serde(rename_all = "camelCase")]
    Scored {
        raw_value: f64,
        score: f64,
        display_value: String,
    },
}

impl AuditOutcome {
    pub fn not_applicable(explanation: &str) -> Self {
        AuditOutcome::NotApplicable {
            explanation: explanation.to_string(),
        }
    }

    pub fn is_applicable(&self) -> bool {
        matches!(self, AuditOutcome::Scored { .. })
    }

    pub fn score(&self) -> Option<f64> {
        match self {
            AuditOutcome::Scored { score, .. } => Some(*score),
            AuditOutcome::NotApplicable { .. } => None,
        }
    }

    pub fn passed(&self, pass_threshold: f64) -> Option<bool> {
        self.score().map(|score| score >= pass_threshold)
    }
}

/// Collaborators the surrounding host supplies to every audit.
pub trait AuditHost {
    /// Maps a measured value onto `[0, 1]` using the host's log-normal curve.
    fn compute_log_normal_score(&self, value: f64, podr: f64, median: f64) -> f64;

    fn not_applicable(&self, explanation: &str) -> AuditOutcome {
        AuditOutcome::not_applicable(explanation)
    }
}

pub trait Audit: Send + Sync {
    fn meta(&self) -> AuditMeta;

    fn audit(&self, records: &[NetworkRecord], host: &dyn AuditHost) -> AuditOutcome;
}

/// Rounds to whole milliseconds and groups thousands: `1234.4` -> `"1,234 ms"`.
pub fn format_ms(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0 {
        format!("-{} ms", grouped)
    } else {
        format!("{} ms", grouped)
    }
}

/// Numeric scoring shared by the timing audits. Scores at or above
/// `pass_threshold` are clamped to exactly 1. A negative or NaN duration is
/// not applicable rather than a fast pass.
pub fn score_timing(
    host: &dyn AuditHost,
    elapsed_ms: f64,
    podr: f64,
    median: f64,
    pass_threshold: f64,
) -> AuditOutcome {
    if elapsed_ms.is_nan() || elapsed_ms < 0.0 {
        return host.not_applicable(EVENTS_OUT_OF_ORDER);
    }

    let mut score = host.compute_log_normal_score(elapsed_ms, podr, median);
    if score >= pass_threshold {
        score = 1.0;
    }

    AuditOutcome::Scored {
        raw_value: elapsed_ms,
        score,
        display_value: format_ms(elapsed_ms),
    }
}

/// Pass/fail outcome for the binary audits.
pub fn score_binary(passed: bool, raw_value: f64, display_value: String) -> AuditOutcome {
    AuditOutcome::Scored {
        raw_value,
        score: if passed { 1.0 } else { 0.0 },
        display_value,
    }
}
