use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::Parser;
use serde::Deserialize;
use shared::domain::TaskFilter;

pub const DEFAULT_CONFIG_PATH: &str = "tasklist.toml";
const ENV_WINDOW_TITLE: &str = "TASKLIST__WINDOW_TITLE";
const ENV_INITIAL_FILTER: &str = "TASKLIST__INITIAL_FILTER";
const ENV_LOG_FILTER: &str = "TASKLIST__LOG_FILTER";

#[derive(Parser, Debug, Default)]
#[command(name = "tasklist", about = "Session task list")]
pub struct Args {
    /// TOML settings file; missing files are skipped.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Filter shown on start: all, todo, pending or completed.
    #[arg(long)]
    pub filter: Option<String>,
    /// tracing filter directives, e.g. "info,task_core=debug".
    #[arg(long)]
    pub log_filter: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub window_title: String,
    pub window_width: f32,
    pub window_height: f32,
    pub initial_filter: TaskFilter,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_title: "Task List".into(),
            window_width: 560.0,
            window_height: 720.0,
            initial_filter: TaskFilter::All,
            log_filter: "info".into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileSettings {
    window_title: Option<String>,
    window_width: Option<f32>,
    window_height: Option<f32>,
    initial_filter: Option<String>,
    log_filter: Option<String>,
}

/// Settings plus anything worth logging once tracing is up.
#[derive(Debug)]
pub struct LoadedSettings {
    pub settings: Settings,
    pub warnings: Vec<String>,
}

pub fn load_settings(args: &Args) -> LoadedSettings {
    load_settings_with_env(args, |name| std::env::var(name).ok())
}

/// Defaults, then the TOML file, then environment, then command-line flags.
pub fn load_settings_with_env(args: &Args, env: impl Fn(&str) -> Option<String>) -> LoadedSettings {
    let mut settings = Settings::default();
    let mut warnings = Vec::new();

    let path = args
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    match read_file_settings(&path) {
        Ok(Some(file_cfg)) => apply_file_settings(&mut settings, file_cfg, &mut warnings),
        Ok(None) => {}
        Err(err) => warnings.push(format!("{err:#}; using defaults")),
    }

    if let Some(v) = non_empty(env(ENV_WINDOW_TITLE)) {
        settings.window_title = v;
    }
    if let Some(v) = non_empty(env(ENV_INITIAL_FILTER)) {
        apply_filter(&mut settings, &v, ENV_INITIAL_FILTER, &mut warnings);
    }
    if let Some(v) = non_empty(env(ENV_LOG_FILTER)) {
        settings.log_filter = v;
    }

    if let Some(v) = non_empty(args.filter.clone()) {
        apply_filter(&mut settings, &v, "--filter", &mut warnings);
    }
    if let Some(v) = non_empty(args.log_filter.clone()) {
        settings.log_filter = v;
    }

    LoadedSettings { settings, warnings }
}

fn read_file_settings(path: &Path) -> anyhow::Result<Option<FileSettings>> {
    if !path.exists() {
        return Ok(None);
    }

    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings file '{}'", path.display()))?;
    let parsed = toml::from_str::<FileSettings>(&raw)
        .with_context(|| format!("invalid settings file '{}'", path.display()))?;
    Ok(Some(parsed))
}

fn apply_file_settings(settings: &mut Settings, file_cfg: FileSettings, warnings: &mut Vec<String>) {
    if let Some(v) = non_empty(file_cfg.window_title) {
        settings.window_title = v;
    }
    if let Some(v) = file_cfg.window_width {
        apply_dimension(&mut settings.window_width, v, "window_width", warnings);
    }
    if let Some(v) = file_cfg.window_height {
        apply_dimension(&mut settings.window_height, v, "window_height", warnings);
    }
    if let Some(v) = non_empty(file_cfg.initial_filter) {
        apply_filter(settings, &v, "initial_filter", warnings);
    }
    if let Some(v) = non_empty(file_cfg.log_filter) {
        settings.log_filter = v;
    }
}

fn apply_dimension(target: &mut f32, value: f32, source: &str, warnings: &mut Vec<String>) {
    if value.is_finite() && value > 0.0 {
        *target = value;
    } else {
        warnings.push(format!("{source}={value} is not a positive size; keeping {target}"));
    }
}

fn apply_filter(settings: &mut Settings, raw: &str, source: &str, warnings: &mut Vec<String>) {
    match raw.parse::<TaskFilter>() {
        Ok(filter) => settings.initial_filter = filter,
        Err(err) => warnings.push(format!(
            "{source}: {err}; keeping '{}'",
            settings.initial_filter
        )),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
