pub mod report;
pub mod rules;

pub use report::ValidationReport;
pub use rules::validate;
