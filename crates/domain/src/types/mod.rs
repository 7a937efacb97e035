//! Shared vocabulary types.
//!
//! Enumerations used by the domain, the wire DTOs and the engine alike.

mod character_type;
pub use character_type::CharacterType;

mod yuga;
pub use yuga::{Yuga, YugaSource};

// Display preference ids
mod display;
pub use display::{FontFamily, FontSize, Palette};
