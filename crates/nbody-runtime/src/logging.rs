//! Logger setup for the binary

use env_logger::{Builder, Env};

/// Default filter when neither `RUST_LOG` nor the given env names one
pub const DEFAULT_FILTER: &str = "info";

/// `env_logger` builder reading `env`, falling back to [`DEFAULT_FILTER`]
pub fn builder(env: Env<'_>) -> Builder {
    Builder::from_env(env.default_filter_or(DEFAULT_FILTER))
}

/// Installs the global logger from `RUST_LOG`
pub fn init() {
    builder(Env::default()).init();
}
