use std::{fs, path::Path, time::Duration};

use anyhow::Context;
use client_core::DEFAULT_SERVER_URL;
use serde::Deserialize;
use url::Url;

pub const SETTINGS_FILE: &str = "taskdesk.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub server_url: String,
    /// `None` leaves requests without a deadline.
    pub request_timeout_secs: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.into(),
            request_timeout_secs: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    server_url: Option<String>,
    request_timeout_secs: Option<u64>,
}

impl Settings {
    pub fn server_url(&self) -> anyhow::Result<Url> {
        Url::parse(self.server_url.trim())
            .with_context(|| format!("invalid server url '{}'", self.server_url))
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// The `--server-url` flag outranks every other layer.
    pub fn override_server_url(&mut self, server_url: Option<String>) {
        if let Some(v) = server_url {
            self.server_url = v;
        }
    }

    fn apply_file(&mut self, raw: &str) {
        let Ok(file_cfg) = toml::from_str::<FileSettings>(raw) else {
            return;
        };
        if let Some(v) = file_cfg.server_url {
            self.server_url = v;
        }
        if let Some(v) = file_cfg.request_timeout_secs {
            self.request_timeout_secs = Some(v);
        }
    }

    fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(v) = var("TASKDESK_SERVER_URL") {
            self.server_url = v;
        }
        if let Some(v) = var("APP__SERVER_URL") {
            self.server_url = v;
        }

        if let Some(v) = var("APP__REQUEST_TIMEOUT_SECS") {
            if let Ok(parsed) = v.parse::<u64>() {
                self.request_timeout_secs = Some(parsed);
            }
        }
    }
}

/// Defaults, then `taskdesk.toml` in `dir`, then whatever `var` resolves.
pub fn load_settings_with(dir: &Path, var: impl Fn(&str) -> Option<String>) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(dir.join(SETTINGS_FILE)) {
        settings.apply_file(&raw);
    }
    settings.apply_env(var);

    settings
}

pub fn load_settings_from(dir: &Path) -> Settings {
    load_settings_with(dir, |key| std::env::var(key).ok())
}

pub fn load_settings() -> Settings {
    load_settings_from(Path::new("."))
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
