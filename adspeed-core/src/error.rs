use adspeed_records::RecordError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuditError {
    #[error("Unknown audit: {0}")]
    UnknownAudit(String),

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    #[error("Settings parse error: {0}")]
    SettingsParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    Record(#[from] RecordError),
}

pub type Result<T> = std::result::Result<T, AuditError>;
