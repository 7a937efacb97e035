//! Deva Archives Shared - wire types for the engine HTTP API
//!
//! This crate contains the types a client needs to talk to the engine:
//! - Request and response DTOs
//! - Display settings field metadata
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde, serde_json and the domain crate
//! 2. **No business logic** - Pure data types and conversions from the domain

pub mod requests;
pub mod responses;
pub mod settings;

pub use requests::{SetQueryRequest, ToggleFacetRequest, UpdateSettingsRequest};
pub use responses::{
    CharacterDto, CharacterNameDto, EraListingDto, ExploreResponse, RelatedCharacterDto,
    RelatedResponse, SpotlightResponse, TimelineResponse,
};
pub use settings::{settings_metadata, SettingOption, SettingsFieldMetadata};
