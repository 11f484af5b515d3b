use serde::{Deserialize, Serialize};

/// Read-only reference to the inspected panel's metadata.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PanelRef {
    pub id: String,
    pub title: String,
}

impl PanelRef {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}
