use std::fs;
use std::path::Path;

use log::{info, warn};

use crate::types::AppResult;
use crate::types::config::CONFIG_FILENAME;

const EXAMPLE_CONFIG: &str = include_str!("../../../example.toml");

/// Write the example config into `dir`. Returns false if one was already there.
pub fn execute_init(dir: &Path) -> AppResult<bool> {
    let cfg_path = dir.join(CONFIG_FILENAME);
    if cfg_path.exists() {
        warn!("{} already exists; leaving it unchanged", cfg_path.display());
        return Ok(false);
    }

    fs::write(&cfg_path, EXAMPLE_CONFIG)?;
    info!("Created {}", cfg_path.display());
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::config::Config;

    #[test]
    fn example_config_parses() {
        let cfg: Config = toml::from_str(EXAMPLE_CONFIG).unwrap();
        assert_eq!(cfg.input(), "./coverage/lcov-report/index.html");
        assert_eq!(cfg.output(), "./coverage-report.json");
    }

    #[test]
    fn existing_config_is_left_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "output = \"mine.json\"\n").unwrap();

        assert!(!execute_init(dir.path()).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "output = \"mine.json\"\n");
    }

    #[test]
    fn creates_config_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(execute_init(dir.path()).unwrap());
        assert_eq!(
            fs::read_to_string(dir.path().join(CONFIG_FILENAME)).unwrap(),
            EXAMPLE_CONFIG
        );
    }
}
