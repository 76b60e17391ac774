use serde::Serialize;

/// Overall coverage for the frontend, exactly as the report prints it (e.g. "87.65%").
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverageReport {
    pub frontend: String,
}

impl CoverageReport {
    pub fn new(percentage: impl Into<String>) -> Self {
        Self {
            frontend: percentage.into(),
        }
    }

    pub fn percentage(&self) -> &str {
        &self.frontend
    }
}
