use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Deserialize, Clone)]
pub struct Config {
    pub server: Server,
    pub auth: Auth,
}

#[derive(Deserialize, Clone)]
pub struct Server {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub mode: ServerMode,
}

#[derive(Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ServerMode {
    #[default]
    Development,
    Production,
}

#[derive(Deserialize, Clone)]
pub struct Auth {
    /// Reference email for the single admin identity.
    pub admin_email: String,
    /// Reference password, compared by exact string equality.
    pub admin_password: String,
    /// Secret used to sign session tokens.
    pub token_secret: String,
    /// Base secret fed into the day-rotating envelope key derivation.
    pub base_secret: String,
    #[serde(default = "default_session_lifetime_secs")]
    pub session_lifetime_secs: u64,
}

fn default_session_lifetime_secs() -> u64 {
    86400 // 1 day
}

impl Server {
    pub fn is_production(&self) -> bool {
        self.mode == ServerMode::Production
    }

    pub fn listen_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

pub fn load_config(path: &Path) -> Config {
    let config_contents = fs::read_to_string(path).expect("Failed to load config file");
    let config: Config =
        toml::from_str(&config_contents).expect("Failed to parse config file contents!");
    config
}
