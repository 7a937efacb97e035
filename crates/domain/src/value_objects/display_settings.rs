//! Display settings value object
//!
//! Settings are stored as individual key-value entries (one per
//! [`SettingKey`]) so a repository only needs `get`/`set` by key. Entries
//! with unknown ids fall back to the default for that key.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;
use crate::types::{FontFamily, FontSize, Palette};

/// Key of a single stored display setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingKey {
    Palette,
    FontFamily,
    FontSize,
}

impl SettingKey {
    pub const ALL: [SettingKey; 3] = [SettingKey::Palette, SettingKey::FontFamily, SettingKey::FontSize];

    pub fn as_str(&self) -> &'static str {
        match self {
            SettingKey::Palette => "palette",
            SettingKey::FontFamily => "font_family",
            SettingKey::FontSize => "font_size",
        }
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SettingKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SettingKey::ALL
            .iter()
            .copied()
            .find(|k| k.as_str() == s.trim())
            .ok_or_else(|| DomainError::parse(format!("Unknown setting key: {}", s)))
    }
}

/// Theme and typography preferences for one session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplaySettings {
    #[serde(default)]
    pub palette: Palette,
    #[serde(default)]
    pub font_family: FontFamily,
    #[serde(default)]
    pub font_size: FontSize,
}

impl DisplaySettings {
    /// Rebuild settings from stored entries. Missing keys and unknown ids
    /// take the default value.
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (SettingKey, &'a str)>,
    {
        let mut settings = Self::default();
        for (key, value) in entries {
            match key {
                SettingKey::Palette => {
                    if let Ok(palette) = value.parse() {
                        settings.palette = palette;
                    }
                }
                SettingKey::FontFamily => {
                    if let Ok(family) = value.parse() {
                        settings.font_family = family;
                    }
                }
                SettingKey::FontSize => {
                    if let Ok(size) = value.parse() {
                        settings.font_size = size;
                    }
                }
            }
        }
        settings
    }

    /// One entry per key, in [`SettingKey::ALL`] order.
    pub fn entries(&self) -> [(SettingKey, &'static str); 3] {
        [
            (SettingKey::Palette, self.palette.id()),
            (SettingKey::FontFamily, self.font_family.id()),
            (SettingKey::FontSize, self.font_size.id()),
        ]
    }
}
