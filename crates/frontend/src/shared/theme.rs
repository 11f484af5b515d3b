//! Named style tokens consumed by the inspector views.
//!
//! Defaults point at the CSS custom properties declared in the app stylesheet,
//! so a host only overrides what it needs.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub background: String,
    pub border: String,
    pub text_secondary: String,
    pub space_xs: String,
    pub space_sm: String,
    pub space_md: String,
    pub space_lg: String,
    pub font_size_sm: String,
    pub font_size_h3: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: "var(--color-bg-secondary)".into(),
            border: "var(--color-border)".into(),
            text_secondary: "var(--color-text-secondary)".into(),
            space_xs: "var(--space-xs)".into(),
            space_sm: "var(--space-sm)".into(),
            space_md: "var(--space-md)".into(),
            space_lg: "var(--space-lg)".into(),
            font_size_sm: "var(--font-size-sm)".into(),
            font_size_h3: "var(--font-size-lg)".into(),
        }
    }
}

impl Theme {
    /// Parse a theme override. Missing tokens keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Theme from context if a host provided one, default otherwise.
    pub fn current() -> Self {
        use_context::<Theme>().unwrap_or_default()
    }
}
