use std::env;
use std::path::{Path, PathBuf};

use clap::Parser;
use log::debug;

use crate::core::cli::{Args, Commands};
use crate::core::cmds;
use crate::core::logging::init_logging;
use crate::types::AppResult;
use crate::types::config::{CliOverrides, config, init_with_overrides};

pub fn run_main() -> AppResult<()> {
    let args = Args::parse();

    // Handle global arguments
    if let Some(cwd_arg) = args.cwd.as_ref() {
        let cwd = PathBuf::from(cwd_arg).canonicalize()?;
        env::set_current_dir(&cwd)?;
    }
    let cwd = env::current_dir()?;

    // Build CLI overrides for config precedence
    let cli_overrides = CliOverrides {
        input: args.input.clone(),
        output: args.output.clone(),
        log_level: args.log_level.clone(),
        log_color: args.log_color.clone(),
    };

    // Initialize configuration (file, then CLI overrides)
    init_with_overrides(&cli_overrides)?;

    // Initialize logging after config so level/color are applied
    init_logging();
    debug!("Current working directory: {}", cwd.display());

    let input = Path::new(config().input());
    let output = Path::new(config().output());

    match args.command.unwrap_or(Commands::Write) {
        Commands::Write => {
            cmds::execute_write(input, output)?;
        }
        Commands::Print(print_args) => {
            cmds::execute_print(input, &print_args.format)?;
        }
        Commands::Config(config_args) => {
            cmds::execute_config(config(), &config_args.format)?;
        }
        Commands::Init => {
            cmds::execute_init(&cwd)?;
        }
    }

    Ok(())
}
