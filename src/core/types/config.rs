use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::types::{AppError, AppResult};

pub const CONFIG_FILENAME: &str = "covbadge.toml";
pub const DEFAULT_INPUT: &str = "./coverage/lcov-report/index.html";
pub const DEFAULT_OUTPUT: &str = "./coverage-report.json";

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct LogConfig {
    pub level: Option<String>,
    pub color: Option<bool>, // None = auto-detect (semantic)
}

impl LogConfig {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }

    pub fn color(&self) -> Option<bool> {
        self.color // None has semantic meaning (auto-detect)
    }

    pub fn to_effective(&self) -> Self {
        Self {
            level: Some(self.level().to_string()),
            color: self.color,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    // Top-level fields
    pub input: Option<String>,
    pub output: Option<String>,

    // Nested sections
    pub log: Option<LogConfig>,
}

impl Config {
    pub fn input(&self) -> &str {
        self.input.as_deref().unwrap_or(DEFAULT_INPUT)
    }

    pub fn output(&self) -> &str {
        self.output.as_deref().unwrap_or(DEFAULT_OUTPUT)
    }

    pub fn log(&self) -> LogConfig {
        self.log.clone().unwrap_or_default()
    }

    pub fn to_effective(&self) -> Self {
        Self {
            input: Some(self.input().to_string()),
            output: Some(self.output().to_string()),
            log: Some(self.log().to_effective()),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub input: Option<String>,
    pub output: Option<String>,
    pub log_level: Option<String>,
    pub log_color: Option<String>, // "on" | "off"
}

static CONFIG: OnceCell<Config> = OnceCell::new();

pub fn config() -> &'static Config {
    CONFIG.get_or_init(|| {
        let mut cfg = Config::default();
        // Only reached without init_with_overrides; a broken file reads as defaults here.
        if let Some(path) = find_nearest_config_file()
            && let Ok(file_cfg) = read_config_file(&path)
        {
            apply_file_config(&mut cfg, &file_cfg);
        }
        cfg
    })
}

/// Build the global config. A config file that exists but cannot be read or
/// parsed fails the run instead of silently falling back to the default paths.
pub fn init_with_overrides(overrides: &CliOverrides) -> AppResult<()> {
    let mut cfg = Config::default();

    // 1) Config file: walk up from cwd and use the first config file found
    if let Some(path) = find_nearest_config_file() {
        let file_cfg = read_config_file(&path)?;
        apply_file_config(&mut cfg, &file_cfg);
    }

    // 2) CLI arguments (highest priority). Only override if user specified.
    apply_cli_overrides(&mut cfg, overrides);

    let _ = CONFIG.set(cfg);
    Ok(())
}

fn read_config_file(path: &Path) -> AppResult<Config> {
    let contents = fs::read_to_string(path).map_err(|e| AppError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    toml::from_str::<Config>(&contents).map_err(|e| AppError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn apply_file_config(cfg: &mut Config, file: &Config) {
    if let Some(input) = non_blank(&file.input) {
        cfg.input = Some(input);
    }
    if let Some(output) = non_blank(&file.output) {
        cfg.output = Some(output);
    }

    if let Some(file_log) = &file.log {
        let mut log = cfg.log.clone().unwrap_or_default();
        if file_log.level.is_some() {
            log.level = file_log.level.clone();
        }
        if file_log.color.is_some() {
            log.color = file_log.color;
        }
        cfg.log = Some(log);
    }
}

fn apply_cli_overrides(cfg: &mut Config, overrides: &CliOverrides) {
    if let Some(input) = non_blank(&overrides.input) {
        cfg.input = Some(input);
    }
    if let Some(output) = non_blank(&overrides.output) {
        cfg.output = Some(output);
    }

    let mut log = cfg.log.clone().unwrap_or_default();
    if let Some(level) = non_blank(&overrides.log_level) {
        log.level = Some(level);
    }
    if let Some(color_str) = &overrides.log_color {
        match color_str.to_lowercase().as_str() {
            "on" => log.color = Some(true),
            "off" => log.color = Some(false),
            _ => {}
        }
    }
    if overrides.log_level.is_some() || overrides.log_color.is_some() {
        cfg.log = Some(log);
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn find_nearest_config_file() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    for dir in cwd.ancestors() {
        let candidate = dir.join(CONFIG_FILENAME);
        if candidate.exists() {
            return Some(candidate);
        }
    }
    None
}

pub fn colors_enabled() -> bool {
    match config().log().color() {
        Some(force) => force,
        None => console::colors_enabled_stderr(),
    }
}
