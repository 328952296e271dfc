//! @ai:module:intent Report output for exercise solve statistics
//! @ai:module:layer infrastructure
//! @ai:module:public_api ReportPrinter, JsonReporter

pub mod json_report;
pub mod text_report;

pub use json_report::{JsonReporter, JsonReporterTrait};
pub use text_report::ReportPrinter;
