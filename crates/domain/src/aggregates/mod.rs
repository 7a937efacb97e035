//! Aggregates - entities with identity that the rest of the domain reads.

mod character;

pub use character::Character;
