//! Deva Archives Engine library.
//!
//! This crate contains all server-side code for the Deva Archives.
//!
//! ## Structure
//!
//! - `use_cases/` - Explore, timeline, profile, settings and AI suggestions
//! - `stores/` - In-memory per-session state
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `api/` - HTTP entry points
//! - `app` - Application composition
//! - `config` - Environment configuration

pub mod api;
pub mod app;
pub mod config;
pub mod infrastructure;
pub mod stores;
pub mod use_cases;

pub use app::App;
