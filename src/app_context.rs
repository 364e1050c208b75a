use crate::config_loader::Config;

/// Process-wide read-only context shared with every handler. The secrets in
/// `config` are loaded once at startup and never mutated afterwards, so no
/// locking is needed across concurrent requests.
pub struct AppContext {
    pub config: Config,
}

impl AppContext {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}
