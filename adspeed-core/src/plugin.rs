// Registry of the ad-speed audits and the report groups they belong to

use crate::audit::{Audit, AuditHost, AuditOutcome};
use crate::audits::{
    AdRequestFromPageStart, AdRequestFromTagLoad, DuplicateTags, LoadsGptOverHttps, TagLoadTime,
};
use crate::error::{AuditError, Result};
use crate::settings::AuditSettings;
use adspeed_records::NetworkRecord;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Group {
    pub id: &'static str,
    pub title: &'static str,
}

pub const GROUPS: [Group; 3] = [
    Group {
        id: "measurements",
        title: "Measurements",
    },
    Group {
        id: "ads-performance",
        title: "Performance",
    },
    Group {
        id: "ads-best-practices",
        title: "Best Practices",
    },
];

pub fn groups() -> &'static [Group] {
    &GROUPS
}

pub fn group_title(id: &str) -> Option<&'static str> {
    GROUPS.iter().find(|g| g.id == id).map(|g| g.title)
}

/// All audits, measurements first.
pub fn audits(settings: &AuditSettings) -> Vec<Box<dyn Audit>> {
    vec![
        Box::new(TagLoadTime::new(settings)),
        Box::new(AdRequestFromTagLoad::new(settings)),
        Box::new(AdRequestFromPageStart::new(settings)),
        Box::new(LoadsGptOverHttps),
        Box::new(DuplicateTags),
    ]
}

pub fn find(id: &str, settings: &AuditSettings) -> Result<Box<dyn Audit>> {
    audits(settings)
        .into_iter()
        .find(|audit| audit.meta().id == id)
        .ok_or_else(|| AuditError::UnknownAudit(id.to_string()))
}

/// Outcome of one audit, keyed by its id.
#[derive(Debug, Clone, Serialize)]
pub struct AuditResult {
    pub id: &'static str,
    pub title: &'static str,
    pub group: &'static str,
    #[serde(flatten)]
    pub outcome: AuditOutcome,
}

/// Run `selected` audits (all when empty) independently over the same records.
pub fn run_audits(
    records: &[NetworkRecord],
    host: &dyn AuditHost,
    settings: &AuditSettings,
    selected: &[String],
) -> Result<Vec<AuditResult>> {
    let audits = if selected.is_empty() {
        audits(settings)
    } else {
        selected
            .iter()
            .map(|id| find(id, settings))
            .collect::<Result<Vec<_>>>()?
    };

    Ok(audits
        .iter()
        .map(|audit| {
            let meta = audit.meta();
            let outcome = audit.audit(records, host);
            debug!("Audit {} -> {:?}", meta.id, outcome);
            let title = match outcome.passed(settings.pass_threshold) {
                Some(false) => meta.failure_title,
                _ => meta.title,
            };
            AuditResult {
                id: meta.id,
                title,
                group: meta.group,
                outcome,
            }
        })
        .collect())
}
