//! Deva Archives domain: the character model, the faceted filter engine and
//! the yuga timeline.
//!
//! Everything here is synchronous and side-effect free. The engine crate owns
//! IO, sessions and the HTTP surface.

pub mod aggregates;
pub mod catalog;
pub mod error;
pub mod filter;
pub mod ids;
pub mod timeline;
pub mod types;
pub mod value_objects;

pub use aggregates::Character;
pub use catalog::{CharacterCatalog, FacetOptions};
pub use error::DomainError;
pub use filter::{filter_characters, CharacterMatcher, ExploreState, Facet, Filters};
pub use ids::{CharacterId, SessionId};
pub use timeline::{EraGroup, SpotlightAction, SpotlightState, SpotlightView, YugaPartition};
pub use types::{CharacterType, FontFamily, FontSize, Palette, Yuga, YugaSource};
pub use value_objects::{
    CharacterName, DisplaySettings, ProfileDetails, Roles, SettingKey, UserProfile,
    RECENTLY_VIEWED_LIMIT,
};
