use crate::types::config::Config;
use crate::types::{AppError, AppResult};

pub fn execute_config(config: &Config, format: &str) -> AppResult<()> {
    if format != "json" && format != "table" {
        return Err(AppError::Custom(format!(
            "Unknown format '{format}', expected 'table' or 'json'"
        )));
    }

    let effective_config = config.to_effective();

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&effective_config)?);
        return Ok(());
    }

    // Table format
    println!("Effective Configuration:");
    println!();
    println!("Paths:");
    println!("  input: {}", config.input());
    println!("  output: {}", config.output());

    println!();
    println!("Log:");
    let log = config.log();
    println!("  level: {}", log.level());
    match log.color() {
        Some(true) => println!("  color: on"),
        Some(false) => println!("  color: off"),
        None => println!("  color: auto"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_format_is_rejected() {
        let err = execute_config(&Config::default(), "yaml").unwrap_err();
        assert!(matches!(err, AppError::Custom(_)));
        assert!(err.to_string().contains("yaml"));
    }
}
