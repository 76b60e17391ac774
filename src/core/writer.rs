use std::fs;
use std::io::Write;
use std::path::Path;

use log::debug;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::types::{AppError, AppResult, CoverageReport};

const INDENT: &[u8] = b"    ";

/// Serialize the report as 4-space indented JSON into `writer`.
pub fn write_json<W: Write>(report: &CoverageReport, writer: W) -> AppResult<()> {
    let mut serializer = Serializer::with_formatter(writer, PrettyFormatter::with_indent(INDENT));
    report.serialize(&mut serializer)?;
    Ok(())
}

/// Create or truncate `path` with the JSON form of the report.
pub fn save_to_json(report: &CoverageReport, path: &Path) -> AppResult<()> {
    let mut buf = Vec::new();
    write_json(report, &mut buf)?;

    fs::write(path, &buf).map_err(|source| AppError::WriteReport {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Wrote {} bytes to {}", buf.len(), path.display());
    Ok(())
}
