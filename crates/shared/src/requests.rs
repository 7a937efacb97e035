//! Request bodies for the engine HTTP API.

use serde::{Deserialize, Serialize};

use deva_domain::{DisplaySettings, Facet, FontFamily, FontSize, Palette};

/// Replace the explore session's search query
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetQueryRequest {
    #[serde(default)]
    pub query: String,
}

/// Add or remove one facet value
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleFacetRequest {
    pub facet: Facet,
    pub value: String,
    #[serde(default = "default_selected")]
    pub selected: bool,
}

fn default_selected() -> bool {
    true
}

/// Partial display-settings update. Absent fields keep their current value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettingsRequest {
    #[serde(default)]
    pub palette: Option<Palette>,
    #[serde(default)]
    pub font_family: Option<FontFamily>,
    #[serde(default)]
    pub font_size: Option<FontSize>,
}

impl UpdateSettingsRequest {
    pub fn apply_to(self, current: DisplaySettings) -> DisplaySettings {
        DisplaySettings {
            palette: self.palette.unwrap_or(current.palette),
            font_family: self.font_family.unwrap_or(current.font_family),
            font_size: self.font_size.unwrap_or(current.font_size),
        }
    }
}
