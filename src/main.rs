use std::process::ExitCode;

use covbadge::run_main;

fn main() -> ExitCode {
    match run_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Logging may not be up yet (config errors come first), so go straight to stderr.
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
