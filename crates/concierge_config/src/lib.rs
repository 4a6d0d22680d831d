//! Configuration for Concierge.
//!
//! Settings are layered, later sources overriding earlier ones:
//! 1. Bundled defaults (`concierge.toml` shipped with the workspace)
//! 2. `~/.config/concierge/concierge.toml`
//! 3. `./concierge.toml`
//! 4. `CONCIERGE_<SECTION>__<KEY>` environment variables

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;

pub use config::{
    ConciergeConfig, GeneratorConfig, ResponseFormat, StoreBackend, StoreConfig, WizardConfig,
};
