use std::io::{self, Write};
use std::path::Path;

use crate::core::extract::extract_coverage_data;
use crate::core::writer::write_json;
use crate::types::{AppError, AppResult};

pub fn execute_print(input: &Path, format: &str) -> AppResult<()> {
    if format != "json" && format != "text" {
        return Err(AppError::Custom(format!(
            "Unknown format '{format}', expected 'json' or 'text'"
        )));
    }

    let report = extract_coverage_data(input)?;

    let mut out = io::stdout().lock();
    if format == "json" {
        write_json(&report, &mut out)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", report.percentage())?;
    }

    Ok(())
}
