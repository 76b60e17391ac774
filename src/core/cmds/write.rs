use std::path::Path;

use log::info;

use crate::core::extract::extract_coverage_data;
use crate::core::writer::save_to_json;
use crate::types::{AppResult, CoverageReport};

pub fn execute_write(input: &Path, output: &Path) -> AppResult<CoverageReport> {
    let report = extract_coverage_data(input)?;
    info!("Frontend coverage: {}", report.percentage());

    save_to_json(&report, output)?;
    println!("Coverage data has been saved to {}", output.display());

    Ok(report)
}
