use std::env;
use std::fs;

use log::warn;
use serde::Deserialize;

pub const DOCUMENT_ENV: &str = "RAPPORT_VIEWER_DOCUMENT";
pub const CONFIG_FILE_ENV: &str = "RAPPORT_VIEWER_CONFIG";
pub const LOG_SPEC_ENV: &str = "RAPPORT_VIEWER_LOG";
pub const HEADLESS_ENV: &str = "RAPPORT_VIEWER_HEADLESS";
const WINDOW_WIDTH_ENV: &str = "RAPPORT_VIEWER_WINDOW_WIDTH";
const WINDOW_HEIGHT_ENV: &str = "RAPPORT_VIEWER_WINDOW_HEIGHT";

const DEFAULT_WINDOW_WIDTH: f32 = 1080.0;
const DEFAULT_WINDOW_HEIGHT: f32 = 760.0;
const MIN_WINDOW_WIDTH: f32 = 640.0;
const MIN_WINDOW_HEIGHT: f32 = 440.0;
const DEFAULT_LOG_SPEC: &str = "info";

/// Where the report comes from and how the window opens. Precedence is
/// defaults, then the TOML file, then environment variables, then the
/// command line.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    pub document_location: Option<String>,
    pub window_width: f32,
    pub window_height: f32,
    pub log_spec: String,
    pub headless: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            document_location: None,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            log_spec: DEFAULT_LOG_SPEC.to_string(),
            headless: false,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    document: Option<String>,
    window: Option<WindowSection>,
    log: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct WindowSection {
    width: Option<f32>,
    height: Option<f32>,
}

pub fn resolve_viewer_config(args: &[String]) -> ViewerConfig {
    load_viewer_config_from(
        args,
        |key| env::var(key).ok(),
        |path| fs::read_to_string(path).ok(),
    )
}

fn load_viewer_config_from<F, R>(args: &[String], lookup: F, read_file: R) -> ViewerConfig
where
    F: Fn(&str) -> Option<String>,
    R: Fn(&str) -> Option<String>,
{
    let mut config = ViewerConfig::default();

    if let Some(path) = lookup(CONFIG_FILE_ENV) {
        let path = path.trim();
        match read_file(path) {
            Some(raw) => apply_config_file(&mut config, &raw, path),
            None => warn!("config file {path} could not be read, ignoring it"),
        }
    }

    if let Some(location) = non_empty(lookup(DOCUMENT_ENV)) {
        config.document_location = Some(location);
    }
    if let Some(value) = parse_f32(&lookup, WINDOW_WIDTH_ENV) {
        config.window_width = value;
    }
    if let Some(value) = parse_f32(&lookup, WINDOW_HEIGHT_ENV) {
        config.window_height = value;
    }
    if let Some(spec) = non_empty(lookup(LOG_SPEC_ENV)) {
        config.log_spec = spec;
    }
    // Presence alone switches modes, whatever the value.
    config.headless = lookup(HEADLESS_ENV).is_some();

    if let Some(location) = args.iter().find(|arg| !arg.starts_with('-')) {
        let location = location.trim();
        if !location.is_empty() {
            config.document_location = Some(location.to_string());
        }
    }

    config.window_width = config.window_width.max(MIN_WINDOW_WIDTH);
    config.window_height = config.window_height.max(MIN_WINDOW_HEIGHT);
    config
}

fn apply_config_file(config: &mut ViewerConfig, raw: &str, path: &str) {
    match toml::from_str::<ConfigFile>(raw) {
        Ok(file) => {
            if let Some(document) = non_empty(file.document) {
                config.document_location = Some(document);
            }
            if let Some(window) = file.window {
                if let Some(width) = window.width {
                    config.window_width = width;
                }
                if let Some(height) = window.height {
                    config.window_height = height;
                }
            }
            if let Some(log) = non_empty(file.log) {
                config.log_spec = log;
            }
        }
        Err(err) => warn!("config file {path} is not valid TOML: {err}"),
    }
}

fn non_empty(raw: Option<String>) -> Option<String> {
    let value = raw?.trim().to_string();
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

fn parse_f32<F>(lookup: &F, key: &str) -> Option<f32>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).and_then(|raw| raw.trim().parse::<f32>().ok())
}
