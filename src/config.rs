use crate::error::{ServerError, ServerResult};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5001;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub debug: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: DEFAULT_HOST.to_string(), port: DEFAULT_PORT, debug: true }
    }
}

impl ServerConfig {
    pub fn from_env() -> ServerResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// `PORT` as the server always read it; host and debug only under the `PREDICT_SERVER_` prefix.
    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> ServerResult<Self> {
        let mut cfg = Self::default();
        if let Some(host) = lookup("PREDICT_SERVER_HOST") {
            if host.trim().is_empty() {
                return Err(ServerError::Config("PREDICT_SERVER_HOST must not be empty".into()));
            }
            cfg.host = host.trim().to_string();
        }
        if let Some(port) = lookup("PORT") {
            cfg.port = port.trim().parse().map_err(|_| ServerError::Config(format!("invalid PORT value: {port:?}")))?;
        }
        if let Some(debug) = lookup("PREDICT_SERVER_DEBUG") {
            cfg.debug = parse_flag(&debug).ok_or_else(|| ServerError::Config(format!("invalid PREDICT_SERVER_DEBUG value: {debug:?}")))?;
        }
        Ok(cfg)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Filter used when `RUST_LOG` is unset.
    pub fn default_log_filter(&self) -> &'static str {
        if self.debug { "debug" } else { "info" }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
