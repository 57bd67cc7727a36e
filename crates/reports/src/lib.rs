//! Performance reports, dispatched two ways.
//!
//! - [`Performance`]: one method branching on a report-type string.
//! - [`ReportService`]: delegates to a [`ReportGenerator`] strategy, one type
//!   per format.
//!
//! Both produce identical text for the same report type.

pub mod generator;
pub mod kind;
pub mod performance;

pub use generator::{
    PdfReportGenerator, ReportGenerator, ReportService, UnsupportedReportGenerator,
    WordReportGenerator, generator_for,
};
pub use kind::{PDF_REPORT, ReportKind, UNSUPPORTED_REPORT, WORD_REPORT};
pub use performance::Performance;
