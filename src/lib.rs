pub mod core;

// Re-export key items for easy importing in this crate
pub use core::types;

// Re-export key items for easy importing in other crates
pub use core::extract::{extract_coverage_data, parse_coverage_html};
pub use core::main_shared::run_main;
pub use core::writer::{save_to_json, write_json};
