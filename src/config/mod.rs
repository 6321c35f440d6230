//! Configuration module.
//!
//! Handles the host-facing settings file carrying extension pairs for the
//! irregular table.

mod settings;

pub use settings::{InflectionSettings, Settings, SettingsError};
