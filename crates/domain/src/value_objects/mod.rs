//! Value objects - validated, immutable building blocks of the domain.

mod display_settings;
mod names;
mod profile;
mod roles;

pub use display_settings::{DisplaySettings, SettingKey};
pub use names::CharacterName;
pub use profile::{ProfileDetails, UserProfile, RECENTLY_VIEWED_LIMIT};
pub use roles::Roles;
