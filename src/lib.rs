//! # Inflect
//!
//! English noun inflection and identifier casing for schema naming
//! conventions: derive a table name from a model name, or a model name from
//! a table name.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                 word (original casing)                   │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [case-fold]
//! ┌─────────────────────────────────────────────────────────┐
//! │     Irregular table (built-in + host extension pairs)    │
//! └─────────────────────────────────────────────────────────┘
//!              │ hit                      │ miss
//!              ▼                          ▼
//!        table form           suffix rules on the original
//! ```
//!
//! Classification and conversion consult the irregular table first and fall
//! back to the regular English suffix rules. The identifier formatter
//! ([`from_underscores`]) is independent of both. A conversion that does
//! not apply returns `None`; no operation here fails.

pub mod case;
pub mod config;
pub mod inflection;
pub mod irregular;

pub use case::from_underscores;
pub use config::{InflectionSettings, Settings, SettingsError};
pub use inflection::{
    is_plural, is_singular, pluralize, singularize, to_plural, to_singular, Inflections,
};
pub use irregular::{IrregularPair, IRREGULAR_NOUNS};
