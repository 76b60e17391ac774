use console::style;
use log::{Level, LevelFilter};

use crate::types::config::{colors_enabled, config};

fn parse_level(level: &str) -> LevelFilter {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "warn" | "warning" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        "off" => LevelFilter::Off,
        _ => LevelFilter::Info,
    }
}

fn level_tag(level: Level, colored: bool) -> String {
    let tag = match level {
        Level::Error => style("error").red().bold(),
        Level::Warn => style("warn").yellow().bold(),
        Level::Info => style("info").green(),
        Level::Debug => style("debug").blue(),
        Level::Trace => style("trace").dim(),
    };
    tag.force_styling(colored).to_string()
}

/// Route `log` records to stderr using the level and color settings from config.
/// Must run after the config has been initialized.
pub fn init_logging() {
    let log_cfg = config().log();
    let level = parse_level(log_cfg.level());
    let colored = colors_enabled();

    // A logger may already be installed (e.g. when embedded); keep it.
    let _ = fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{}: {}",
                level_tag(record.level(), colored),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply();
}
