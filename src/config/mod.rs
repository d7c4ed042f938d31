//! Resolution mapping configuration
//!
//! - **mapping**: typed, validated resolution → DPI table
//! - **store**: file bootstrap and loading
//! - **defaults**: template written on first run

pub mod defaults;
pub mod mapping;
pub mod store;

pub use mapping::{FormatError, ResolutionMapping};
pub use store::ConfigStore;
