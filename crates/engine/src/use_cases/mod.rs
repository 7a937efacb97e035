//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific area of the archive.
//! Use cases combine the catalog, the session store and the ports.

pub mod explore;
pub mod profile;
pub mod related;
pub mod settings;
pub mod timeline;

// Re-export main types
pub use explore::{BrowseCharacters, ExploreError, ExploreSession, ExploreUseCases};
pub use profile::{ProfileError, ProfileOps};
pub use related::{RelatedError, SuggestRelated};
pub use settings::{SettingsError, SettingsOps};
pub use timeline::TimelineUseCases;
