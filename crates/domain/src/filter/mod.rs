//! Faceted filtering of the character collection.

mod engine;
mod explore;
mod facet;
mod filters;

pub use engine::{filter_characters, CharacterMatcher};
pub use explore::ExploreState;
pub use facet::Facet;
pub use filters::Filters;
