use crate::error::Result;
use crate::parsed_url::ParsedUrl;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ResourceType {
    Document,
    Script,
    #[serde(rename = "XHR")]
    Xhr,
    Fetch,
    Image,
    Stylesheet,
    Font,
    Media,
    #[default]
    #[serde(other)]
    Other,
}

impl ResourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Document => "document",
            ResourceType::Script => "script",
            ResourceType::Xhr => "xhr",
            ResourceType::Fetch => "fetch",
            ResourceType::Image => "image",
            ResourceType::Stylesheet => "stylesheet",
            ResourceType::Font => "font",
            ResourceType::Media => "media",
            ResourceType::Other => "other",
        }
    }
}

/// One observed resource load. Times are seconds since the trace origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkRecord {
    pub url: String,
    pub start_time: f64,
    pub end_time: f64,
    /// Absent when the export carries no HTTP status.
    #[serde(default)]
    pub status_code: Option<u16>,
    #[serde(default)]
    pub failed: bool,
    #[serde(default)]
    pub resource_type: ResourceType,
}

impl NetworkRecord {
    pub fn new(url: String, start_time: f64, end_time: f64) -> Self {
        Self {
            url,
            start_time,
            end_time,
            status_code: Some(200),
            failed: false,
            resource_type: ResourceType::Other,
        }
    }

    pub fn with_failure(url: String, start_time: f64, end_time: f64) -> Self {
        Self {
            url,
            start_time,
            end_time,
            status_code: None,
            failed: true,
            resource_type: ResourceType::Other,
        }
    }

    pub fn with_status(mut self, status_code: u16) -> Self {
        self.status_code = Some(status_code);
        self
    }

    pub fn with_resource_type(mut self, resource_type: ResourceType) -> Self {
        self.resource_type = resource_type;
        self
    }

    /// Finished without a network error. A status, when present, must not
    /// be an error status.
    pub fn is_successful(&self) -> bool {
        !self.failed
            && self
                .status_code
                .is_none_or(|status| (200..400).contains(&status))
    }

    pub fn is_document(&self) -> bool {
        self.resource_type == ResourceType::Document
    }

    pub fn parsed_url(&self) -> Result<ParsedUrl> {
        ParsedUrl::parse(&self.url)
    }
}
