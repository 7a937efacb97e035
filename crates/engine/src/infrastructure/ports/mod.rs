//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Character data (could swap the JSON file for a database)
//! - Settings storage (could swap SQLite for anything key-value)
//! - LLM calls (could swap Ollama -> any OpenAI-compatible server)
//! - Clock (for testing)

mod error;
mod external;
mod repos;
mod testing;

// =============================================================================
// Repository Ports
// =============================================================================
pub use repos::{CharacterSource, SettingsRepo};

// =============================================================================
// External Service Ports
// =============================================================================
pub use external::{
    ChatMessage, FinishReason, LlmPort, LlmRequest, LlmResponse, MessageRole, TokenUsage,
};

// =============================================================================
// Test-Only Mocks (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use external::MockLlmPort;
#[cfg(test)]
pub use repos::{MockCharacterSource, MockSettingsRepo};
#[cfg(test)]
pub use testing::MockClockPort;

// =============================================================================
// Testing Ports
// =============================================================================
pub use testing::ClockPort;

// =============================================================================
// Error Types
// =============================================================================
pub use error::{LlmError, RepoError};
