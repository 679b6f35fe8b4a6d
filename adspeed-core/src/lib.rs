pub mod audit;
pub mod audits;
pub mod classify;
pub mod error;
pub mod plugin;
pub mod settings;
pub mod timing;

pub use audit::{Audit, AuditHost, AuditMeta, AuditOutcome, ScoreDisplayMode};
pub use error::AuditError;
pub use plugin::{AuditResult, run_audits};
pub use settings::{AuditSettings, Thresholds};
