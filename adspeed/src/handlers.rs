use crate::host::CliHost;
use adspeed_core::classify::classify;
use adspeed_core::plugin::{self, AuditResult};
use adspeed_core::{AuditOutcome, AuditSettings, run_audits};
use adspeed_records::{NetworkRecord, load_records};
use anyhow::{Context, Result};
use clap::ArgMatches;
use colored::Colorize;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport<'a> {
    pub generated_at: String,
    pub records_file: String,
    pub total_records: usize,
    pub audits: &'a [AuditResult],
}

/// Expand a leading `~` in a user supplied path.
pub fn expand_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    PathBuf::from(shellexpand::tilde(raw.as_ref()).as_ref())
}

/// Settings from `--config`, or the defaults.
pub fn load_settings(config: Option<&PathBuf>) -> Result<AuditSettings> {
    match config {
        Some(path) => {
            let path = path.to_string_lossy();
            AuditSettings::load(&path).with_context(|| format!("Failed to load settings from {}", path))
        }
        None => Ok(AuditSettings::default()),
    }
}

async fn read_records(path: &Path) -> Result<Vec<NetworkRecord>> {
    let path = expand_path(path);
    load_records(&path)
        .await
        .with_context(|| format!("Failed to load network records from {}", path.display()))
}

pub async fn handle_audit(args: &ArgMatches) -> Result<()> {
    let records_path = args
        .get_one::<PathBuf>("records")
        .context("--records is required")?;
    let settings = load_settings(args.get_one::<PathBuf>("config"))?;
    let format = args
        .get_one::<String>("format")
        .and_then(|f| OutputFormat::from_str(f))
        .unwrap_or(OutputFormat::Text);
    let selected: Vec<String> = args
        .get_many::<String>("only")
        .map(|ids| ids.cloned().collect())
        .unwrap_or_default();

    let records = read_records(records_path).await?;
    let results = run_audits(&records, &CliHost::new(), &settings, &selected)?;
    info!("Ran {} audits over {} records", results.len(), records.len());

    let output = match format {
        OutputFormat::Text => render_text_report(&results, settings.pass_threshold),
        OutputFormat::Json => {
            let report = AuditReport {
                generated_at: chrono::Utc::now().to_rfc3339(),
                records_file: records_path.display().to_string(),
                total_records: records.len(),
                audits: &results,
            };
            serde_json::to_string_pretty(&report)?
        }
    };
    println!("{}", output);
    Ok(())
}

pub async fn handle_classify(args: &ArgMatches) -> Result<()> {
    let records_path = args
        .get_one::<PathBuf>("records")
        .context("--records is required")?;
    let show_all = args.get_flag("all");

    let records = read_records(records_path).await?;
    print!("{}", render_classification(&records, show_all));
    Ok(())
}

pub fn handle_list() {
    print!("{}", render_audit_list(&AuditSettings::default()));
}

fn status_marker(outcome: &AuditOutcome, pass_threshold: f64) -> String {
    match outcome.passed(pass_threshold) {
        Some(true) => "✓".green().bold().to_string(),
        Some(false) => "✗".red().bold().to_string(),
        None => "–".bright_black().to_string(),
    }
}

/// Human readable report, one section per group.
pub fn render_text_report(results: &[AuditResult], pass_threshold: f64) -> String {
    let mut report = String::new();

    for group in plugin::groups() {
        let in_group: Vec<&AuditResult> = results.iter().filter(|r| r.group == group.id).collect();
        if in_group.is_empty() {
            continue;
        }

        report.push_str(&format!("## {}\n", group.title.bold()));
        for result in in_group {
            let marker = status_marker(&result.outcome, pass_threshold);
            match &result.outcome {
                AuditOutcome::Scored {
                    score,
                    display_value,
                    ..
                } => {
                    report.push_str(&format!(
                        "  {} {} {} (score {:.2})\n",
                        marker,
                        result.title,
                        display_value.bright_white(),
                        score
                    ));
                }
                AuditOutcome::NotApplicable { explanation } => {
                    report.push_str(&format!(
                        "  {} {} {}\n",
                        marker,
                        result.title,
                        format!("not applicable: {}", explanation).bright_black()
                    ));
                }
            }
        }
        report.push('\n');
    }

    report
}

/// Ad-related records with their classification labels. Unrelated records are
/// listed only when `show_all` is set.
pub fn render_classification(records: &[NetworkRecord], show_all: bool) -> String {
    let mut report = String::new();
    let mut ad_related = 0;
    let mut unparseable = 0;

    for record in records {
        let url = match record.parsed_url() {
            Ok(url) => url,
            Err(_) => {
                unparseable += 1;
                continue;
            }
        };

        let classification = classify(&url);
        if classification.is_ad_related() {
            ad_related += 1;
        } else if !show_all {
            continue;
        }

        let labels = classification.labels().join(", ");
        let status = record
            .status_code
            .map(|code| code.to_string())
            .unwrap_or_else(|| "-".to_string());
        report.push_str(&format!(
            "  {:>3} {} {}\n",
            status,
            record.url,
            format!("[{}]", labels).cyan()
        ));
    }

    report.push_str(&format!(
        "\n{} records, {} ad-related, {} unparseable\n",
        records.len(),
        ad_related,
        unparseable
    ));
    report
}

pub fn render_audit_list(settings: &AuditSettings) -> String {
    let mut list = String::new();
    let audits = plugin::audits(settings);

    for group in plugin::groups() {
        let in_group: Vec<_> = audits.iter().filter(|a| a.meta().group == group.id).collect();
        if in_group.is_empty() {
            continue;
        }

        list.push_str(&format!("{}\n", group.title.bold()));
        for audit in in_group {
            let meta = audit.meta();
            list.push_str(&format!(
                "  {} {} ({})\n",
                format!("{:<28}", meta.id).bright_white(),
                meta.title,
                meta.score_display_mode.as_str()
            ));
        }
    }

    list
}
