use crate::enums::inspect_tab::InspectTab;
use serde::{Deserialize, Serialize};

/// One selectable inspection view. Position in the list is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabDescriptor {
    pub label: String,
    pub value: InspectTab,
}

impl TabDescriptor {
    pub fn new(label: impl Into<String>, value: InspectTab) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }

    pub fn is_active(&self, active: InspectTab) -> bool {
        self.value == active
    }
}

impl From<InspectTab> for TabDescriptor {
    fn from(tab: InspectTab) -> Self {
        Self::new(tab.display_name(), tab)
    }
}

/// What the inspected panel currently has to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InspectContext {
    pub has_data: bool,
    pub has_metadata: bool,
    pub has_error: bool,
    pub has_queries: bool,
}

/// Tabs offered for a panel, in display order. Stats and JSON are always there.
pub fn build_tabs(ctx: &InspectContext) -> Vec<TabDescriptor> {
    let mut tabs: Vec<TabDescriptor> = Vec::new();
    if ctx.has_data {
        tabs.push(InspectTab::Data.into());
    }
    if ctx.has_metadata {
        tabs.push(InspectTab::Meta.into());
    }
    if ctx.has_error {
        tabs.push(InspectTab::Error.into());
    }
    tabs.push(InspectTab::Stats.into());
    tabs.push(InspectTab::Json.into());
    if ctx.has_queries {
        tabs.push(InspectTab::Query.into());
    }
    tabs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(tabs: &[TabDescriptor]) -> Vec<InspectTab> {
        tabs.iter().map(|t| t.value).collect()
    }

    #[test]
    fn test_minimal_tabs() {
        let tabs = build_tabs(&InspectContext::default());
        assert_eq!(values(&tabs), vec![InspectTab::Stats, InspectTab::Json]);
    }

    #[test]
    fn test_full_tabs_order() {
        let ctx = InspectContext {
            has_data: true,
            has_metadata: true,
            has_error: true,
            has_queries: true,
        };
        assert_eq!(values(&build_tabs(&ctx)), InspectTab::all());
    }

    #[test]
    fn test_default_labels() {
        let tab: TabDescriptor = InspectTab::Json.into();
        assert_eq!(tab.label, "JSON");
        assert!(tab.is_active(InspectTab::Json));
        assert!(!tab.is_active(InspectTab::Data));
    }
}
