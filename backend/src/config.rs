//! Server settings.
//!
//! Values start from [`Settings::default`], are overridden by an optional
//! `server.toml` next to the binary's working directory, and finally by
//! environment variables. A malformed value never aborts startup: it is
//! logged and the previous value is kept.

use std::collections::HashMap;
use std::fs;

use log::warn;

pub const DEFAULT_COMPLETIONS_URL: &str = "https://router.huggingface.co/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "mistralai/Mixtral-8x7B-Instruct-v0.1";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    /// Launch the default browser on the served URL at startup.
    pub open_browser: bool,
    /// OpenAI-compatible chat completions endpoint used for recipes.
    pub completions_url: String,
    pub model: String,
    /// Bearer token for the completions endpoint. Only read from the
    /// environment so it never lands in a config file.
    pub hf_token: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 8080,
            open_browser: true,
            completions_url: DEFAULT_COMPLETIONS_URL.into(),
            model: DEFAULT_MODEL.into(),
            hf_token: None,
        }
    }
}

impl Settings {
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("server.toml") {
        apply_file(&mut settings, &raw);
    }
    apply_env(&mut settings, |key| std::env::var(key).ok());

    settings
}

fn apply_file(settings: &mut Settings, raw: &str) {
    let file_cfg = match toml::from_str::<HashMap<String, toml::Value>>(raw) {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!("Ignoring server.toml: {}", e);
            return;
        }
    };

    let get = |key: &str| file_cfg.get(key).map(value_to_string);

    if let Some(v) = get("host") {
        settings.host = v;
    }
    if let Some(v) = get("port") {
        set_port(settings, &v);
    }
    if let Some(v) = get("open_browser") {
        set_open_browser(settings, &v);
    }
    if let Some(v) = get("completions_url") {
        settings.completions_url = v;
    }
    if let Some(v) = get("model") {
        settings.model = v;
    }
}

fn apply_env(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("DEMOS_HOST") {
        settings.host = v;
    }
    if let Some(v) = lookup("DEMOS_PORT") {
        set_port(settings, &v);
    }
    if let Some(v) = lookup("DEMOS_OPEN_BROWSER") {
        set_open_browser(settings, &v);
    }
    if let Some(v) = lookup("DEMOS_COMPLETIONS_URL") {
        settings.completions_url = v;
    }
    if let Some(v) = lookup("DEMOS_MODEL") {
        settings.model = v;
    }
    if let Some(v) = lookup("HF_ACCESS_TOKEN") {
        let v = v.trim().to_string();
        settings.hf_token = if v.is_empty() { None } else { Some(v) };
    }
}

fn value_to_string(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn set_port(settings: &mut Settings, raw: &str) {
    match raw.trim().parse::<u16>() {
        Ok(port) => settings.port = port,
        Err(_) => warn!("Ignoring invalid port {:?}", raw),
    }
}

fn set_open_browser(settings: &mut Settings, raw: &str) {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => settings.open_browser = true,
        "0" | "false" | "no" | "off" => settings.open_browser = false,
        _ => warn!("Ignoring invalid open_browser value {:?}", raw),
    }
}
