//! Display settings field metadata, for building the settings form.

use serde::{Deserialize, Serialize};

use deva_domain::{FontFamily, FontSize, Palette, SettingKey};

/// One selectable value of a settings field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingOption {
    pub value: String,
    pub label: String,
}

/// Metadata for a single settings field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsFieldMetadata {
    /// Field key (matches the stored setting key)
    pub key: String,
    /// JSON field name in `DisplaySettings`
    pub field: String,
    pub display_name: String,
    pub description: String,
    /// Always "select" for display settings
    pub field_type: String,
    pub default_value: serde_json::Value,
    pub options: Vec<SettingOption>,
    /// Category for grouping in UI
    pub category: String,
}

fn options<T: Copy>(
    all: &[T],
    id: impl Fn(&T) -> &'static str,
    label: impl Fn(&T) -> &'static str,
) -> Vec<SettingOption> {
    all.iter()
        .map(|v| SettingOption {
            value: id(v).to_string(),
            label: label(v).to_string(),
        })
        .collect()
}

/// Get metadata for all display settings fields
pub fn settings_metadata() -> Vec<SettingsFieldMetadata> {
    vec![
        SettingsFieldMetadata {
            key: SettingKey::Palette.as_str().into(),
            field: "palette".into(),
            display_name: "Colour Palette".into(),
            description: "Theme colours used across the archive".into(),
            field_type: "select".into(),
            default_value: serde_json::json!(Palette::default().id()),
            options: options(Palette::all(), Palette::id, Palette::label),
            category: "Theme".into(),
        },
        SettingsFieldMetadata {
            key: SettingKey::FontFamily.as_str().into(),
            field: "fontFamily".into(),
            display_name: "Font Family".into(),
            description: "Typeface for body text".into(),
            field_type: "select".into(),
            default_value: serde_json::json!(FontFamily::default().id()),
            options: options(FontFamily::all(), FontFamily::id, FontFamily::label),
            category: "Typography".into(),
        },
        SettingsFieldMetadata {
            key: SettingKey::FontSize.as_str().into(),
            field: "fontSize".into(),
            display_name: "Font Size".into(),
            description: "Base text size".into(),
            field_type: "select".into(),
            default_value: serde_json::json!(FontSize::default().id()),
            options: options(FontSize::all(), FontSize::id, FontSize::label),
            category: "Typography".into(),
        },
    ]
}
