//! In-memory state storage modules.
//!
//! Stores manage runtime state that doesn't belong in the database:
//! - `SessionStore` - explore, spotlight and profile state per browser session

pub mod session;

pub use session::{SessionState, SessionStore};
