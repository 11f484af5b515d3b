use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Views offered by the panel inspector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InspectTab {
    Data,
    Meta,
    Error,
    Stats,
    Json,
    Query,
}

impl InspectTab {
    /// Code used in the URL (`inspectTab=<code>`)
    pub fn code(&self) -> &'static str {
        match self {
            InspectTab::Data => "data",
            InspectTab::Meta => "meta",
            InspectTab::Error => "error",
            InspectTab::Stats => "stats",
            InspectTab::Json => "json",
            InspectTab::Query => "query",
        }
    }

    /// Default tab label
    pub fn display_name(&self) -> &'static str {
        match self {
            InspectTab::Data => "Data",
            InspectTab::Meta => "Meta data",
            InspectTab::Error => "Error",
            InspectTab::Stats => "Stats",
            InspectTab::Json => "JSON",
            InspectTab::Query => "Query",
        }
    }

    /// Every tab, in display order
    pub fn all() -> Vec<InspectTab> {
        vec![
            InspectTab::Data,
            InspectTab::Meta,
            InspectTab::Error,
            InspectTab::Stats,
            InspectTab::Json,
            InspectTab::Query,
        ]
    }

    /// Parse a URL code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "data" => Some(InspectTab::Data),
            "meta" => Some(InspectTab::Meta),
            "error" => Some(InspectTab::Error),
            "stats" => Some(InspectTab::Stats),
            "json" => Some(InspectTab::Json),
            "query" => Some(InspectTab::Query),
            _ => None,
        }
    }
}

impl fmt::Display for InspectTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for InspectTab {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| anyhow::anyhow!("unknown inspect tab: '{}'", s))
    }
}
