use std::fs;
use std::path::Path;

use log::debug;
use scraper::{Html, Selector};

use crate::types::{AppError, AppResult, CoverageReport};

/// Summary block of an lcov HTML report. The first one holds the statements total.
pub const SUMMARY_SELECTOR: &str = "div.fl.pad1y.space-right2";

/// Percentage inside a summary block.
pub const PERCENTAGE_SELECTOR: &str = "span.strong";

fn selector(css: &str) -> AppResult<Selector> {
    Selector::parse(css).map_err(|e| AppError::Selector(format!("{css}: {e}")))
}

/// Read the report at `path` and pull out the overall coverage percentage.
pub fn extract_coverage_data(path: &Path) -> AppResult<CoverageReport> {
    debug!("Reading coverage report from {}", path.display());
    let html = fs::read_to_string(path).map_err(|source| AppError::ReadReport {
        path: path.to_path_buf(),
        source,
    })?;
    parse_coverage_html(&html)
}

/// Extract the percentage from report HTML that is already in memory.
///
/// Multiple summary blocks are expected; the first in document order wins and
/// only that block is searched for the percentage.
pub fn parse_coverage_html(html: &str) -> AppResult<CoverageReport> {
    let document = Html::parse_document(html);
    let summary_selector = selector(SUMMARY_SELECTOR)?;
    let percentage_selector = selector(PERCENTAGE_SELECTOR)?;

    let mut summaries = document.select(&summary_selector);
    let summary = summaries.next().ok_or_else(|| AppError::MissingElement {
        selector: SUMMARY_SELECTOR.to_string(),
    })?;
    debug!(
        "Found {} summary block(s), using the first",
        1 + summaries.count()
    );

    let span = summary
        .select(&percentage_selector)
        .next()
        .ok_or_else(|| AppError::MissingElement {
            selector: format!("{SUMMARY_SELECTOR} {PERCENTAGE_SELECTOR}"),
        })?;

    // Each text node is trimmed before joining, so nested markup and padding vanish.
    let percentage: String = span
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    if percentage.is_empty() {
        return Err(AppError::EmptyPercentage {
            selector: format!("{SUMMARY_SELECTOR} {PERCENTAGE_SELECTOR}"),
        });
    }

    debug!("Extracted coverage percentage {percentage}");
    Ok(CoverageReport::new(percentage))
}

#[cfg(test)]
mod tests {
    use super::*;

    const LCOV_INDEX: &str = r#"<!doctype html>
<html lang="en">
<head><title>Code coverage report for All files</title></head>
<body>
<div class='wrapper'>
    <div class='pad1'>
        <h1>All files</h1>
        <div class='clearfix'>
            <div class='fl pad1y space-right2'>
                <span class="strong">87.65% </span>
                <span class="quiet">Statements</span>
                <span class='fraction'>710/810</span>
            </div>
            <div class='fl pad1y space-right2'>
                <span class="strong">71.2% </span>
                <span class="quiet">Branches</span>
                <span class='fraction'>178/250</span>
            </div>
            <div class='fl pad1y space-right2'>
                <span class="strong">80% </span>
                <span class="quiet">Functions</span>
                <span class='fraction'>96/120</span>
            </div>
        </div>
    </div>
</div>
</body>
</html>
"#;

    #[test]
    fn takes_the_first_summary_block() {
        let report = parse_coverage_html(LCOV_INDEX).unwrap();
        assert_eq!(report.percentage(), "87.65%");
    }

    #[test]
    fn strips_surrounding_whitespace() {
        let html = r#"<div class="fl pad1y space-right2"><span class="strong">
              42.5%
        </span></div>"#;
        let report = parse_coverage_html(html).unwrap();
        assert_eq!(report.frontend, "42.5%");
    }

    #[test]
    fn class_order_does_not_matter() {
        let html = r#"<div class="space-right2 fl pad1y"><span class="quiet strong">99%</span></div>"#;
        assert_eq!(parse_coverage_html(html).unwrap().frontend, "99%");
    }

    #[test]
    fn missing_summary_block_is_an_error() {
        let html = r#"<div class="fl pad1y"><span class="strong">50%</span></div>"#;
        let err = parse_coverage_html(html).unwrap_err();
        assert!(matches!(err, AppError::MissingElement { .. }), "{err}");
    }

    #[test]
    fn missing_percentage_span_is_an_error() {
        // Only the first block is searched, even if a later one would match.
        let html = r#"
            <div class="fl pad1y space-right2"><span class="quiet">Statements</span></div>
            <div class="fl pad1y space-right2"><span class="strong">50%</span></div>
        "#;
        let err = parse_coverage_html(html).unwrap_err();
        match err {
            AppError::MissingElement { selector } => {
                assert_eq!(selector, "div.fl.pad1y.space-right2 span.strong")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn blank_percentage_is_an_error() {
        let html = r#"<div class="fl pad1y space-right2"><span class="strong">   </span></div>"#;
        let err = parse_coverage_html(html).unwrap_err();
        assert!(matches!(err, AppError::EmptyPercentage { .. }));
    }

    #[test]
    fn value_is_kept_verbatim() {
        let html = r#"<div class="fl pad1y space-right2"><span class="strong">Unknown% </span></div>"#;
        assert_eq!(parse_coverage_html(html).unwrap().frontend, "Unknown%");
    }
}
