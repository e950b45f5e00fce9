use std::{collections::HashMap, fs, net::SocketAddr};

use anyhow::Context;
use shared::{domain::AccessKey, protocol::WEB3FORMS_SUBMIT_URL};

pub const SETTINGS_FILE: &str = "relay.toml";

#[derive(Debug, Clone)]
pub struct Settings {
    pub bind_addr: String,
    pub upstream_url: String,
    pub access_key: Option<AccessKey>,
    pub upstream_timeout_seconds: u64,
    pub max_body_bytes: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8788".into(),
            upstream_url: WEB3FORMS_SUBMIT_URL.into(),
            access_key: None,
            upstream_timeout_seconds: 15,
            max_body_bytes: 64 * 1024,
        }
    }
}

impl Settings {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        self.bind_addr
            .parse()
            .with_context(|| format!("invalid bind address '{}'", self.bind_addr))
    }
}

pub fn load_settings() -> Settings {
    let file_cfg = fs::read_to_string(SETTINGS_FILE)
        .ok()
        .and_then(|raw| parse_settings_file(&raw));
    resolve_settings(file_cfg.as_ref(), |name| std::env::var(name).ok())
}

fn parse_settings_file(raw: &str) -> Option<HashMap<String, String>> {
    toml::from_str::<HashMap<String, String>>(raw).ok()
}

/// Defaults, then the settings file, then environment variables. For each
/// setting the `APP__` form of the variable wins over the plain one.
fn resolve_settings<F>(file_cfg: Option<&HashMap<String, String>>, env: F) -> Settings
where
    F: Fn(&str) -> Option<String>,
{
    let mut settings = Settings::default();

    if let Some(file_cfg) = file_cfg {
        if let Some(v) = file_cfg.get("bind_addr") {
            settings.bind_addr = v.clone();
        }
        if let Some(v) = file_cfg.get("upstream_url") {
            settings.upstream_url = v.clone();
        }
        if let Some(v) = file_cfg.get("access_key") {
            settings.access_key = AccessKey::parse(v.clone());
        }
        if let Some(v) = file_cfg.get("upstream_timeout_seconds") {
            if let Ok(parsed) = v.parse::<u64>() {
                settings.upstream_timeout_seconds = parsed;
            }
        }
        if let Some(v) = file_cfg.get("max_body_bytes") {
            if let Ok(parsed) = v.parse::<usize>() {
                settings.max_body_bytes = parsed;
            }
        }
    }

    if let Some(v) = env("RELAY_BIND") {
        settings.bind_addr = v;
    }
    if let Some(v) = env("APP__BIND_ADDR") {
        settings.bind_addr = v;
    }

    if let Some(v) = env("WEB3FORMS_URL") {
        settings.upstream_url = v;
    }
    if let Some(v) = env("APP__UPSTREAM_URL") {
        settings.upstream_url = v;
    }

    if let Some(v) = env("WEB3FORMS_ACCESS_KEY") {
        settings.access_key = AccessKey::parse(v);
    }
    if let Some(v) = env("APP__ACCESS_KEY") {
        settings.access_key = AccessKey::parse(v);
    }

    if let Some(v) = env("APP__UPSTREAM_TIMEOUT_SECONDS") {
        if let Ok(parsed) = v.parse::<u64>() {
            settings.upstream_timeout_seconds = parsed;
        }
    }
    if let Some(v) = env("APP__MAX_BODY_BYTES") {
        if let Ok(parsed) = v.parse::<usize>() {
            settings.max_body_bytes = parsed;
        }
    }

    settings
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
