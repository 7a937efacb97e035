//! Display preference ids (theme palette, font family, font size).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

macro_rules! display_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $what:literal {
            $($variant:ident => ($id:literal, $label:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn all() -> &'static [$name] {
                &[$($name::$variant),+]
            }

            /// Stable id stored by the settings repository
            pub fn id(&self) -> &'static str {
                match self {
                    $($name::$variant => $id),+
                }
            }

            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.id())
            }
        }

        impl std::str::FromStr for $name {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let needle = s.trim();
                $name::all()
                    .iter()
                    .copied()
                    .find(|v| v.id().eq_ignore_ascii_case(needle))
                    .ok_or_else(|| DomainError::parse(format!("Unknown {}: {}", $what, s)))
            }
        }

        impl TryFrom<String> for $name {
            type Error = DomainError;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                s.parse()
            }
        }

        impl From<$name> for String {
            fn from(v: $name) -> String {
                v.id().to_string()
            }
        }
    };
}

display_enum! {
    /// Colour palette for the site theme
    Palette, "palette" {
        Saffron => ("saffron", "Saffron"),
        Lotus => ("lotus", "Lotus"),
        Peacock => ("peacock", "Peacock"),
        Forest => ("forest", "Forest"),
        Midnight => ("midnight", "Midnight"),
    }
}

display_enum! {
    /// Body font family
    FontFamily, "font family" {
        Serif => ("serif", "Serif"),
        Sans => ("sans", "Sans Serif"),
        Devanagari => ("devanagari", "Devanagari"),
        Mono => ("mono", "Monospace"),
    }
}

display_enum! {
    /// Base font size
    FontSize, "font size" {
        Small => ("sm", "Small"),
        Medium => ("md", "Medium"),
        Large => ("lg", "Large"),
        ExtraLarge => ("xl", "Extra Large"),
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette::Saffron
    }
}

impl Default for FontFamily {
    fn default() -> Self {
        FontFamily::Serif
    }
}

impl Default for FontSize {
    fn default() -> Self {
        FontSize::Medium
    }
}
