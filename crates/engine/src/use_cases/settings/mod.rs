//! Display settings use cases.

mod settings_ops;

pub use settings_ops::{SettingsError, SettingsOps};
