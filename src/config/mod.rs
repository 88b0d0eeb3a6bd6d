//! Pipeline configuration.
//!
//! A config document is resolved in two tiers:
//! 1. **Defaults** - [`DefaultSettings`], built once per process
//! 2. **Document** - the user's YAML/JSON file
//!
//! ## Merge Strategy
//! - Top-level options: shallow replace, null means "not specified"
//! - `pipeline`: a template name is expanded through the registry, a list of
//!   component specs is kept in document order
//!
//! After load, [`NluConfig::set_component_attr`] is the only way to change a
//! resolved configuration.

mod loader;
mod merge;
mod resolved;
mod types;

pub use loader::{
    ConfigResolver, DEFAULT_CONFIG_LOCATION, load, load_with_overrides, load_with_overrides_in,
    parse_document, read_document,
};
pub use merge::{override_defaults, override_options};
pub use resolved::NluConfig;
pub use types::{ComponentSpec, DefaultSettings, GlobalSettings, NAME_KEY, PIPELINE_KEY};
