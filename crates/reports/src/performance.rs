//! Report dispatch by string.

use solidforge_payroll::Employee;

use crate::kind::{PDF_REPORT, UNSUPPORTED_REPORT, WORD_REPORT};

/// Builds every format itself. Adding a format means editing this method.
#[derive(Debug, Clone, Copy, Default)]
pub struct Performance;

impl Performance {
    pub fn new() -> Self {
        Self
    }

    pub fn generate_report(&self, report_type: &str, employee: &Employee) -> String {
        tracing::debug!(report_type, employee = employee.name(), "generating report by type");
        if report_type == "PDF" {
            PDF_REPORT.to_string()
        } else if report_type == "Word" {
            WORD_REPORT.to_string()
        } else {
            UNSUPPORTED_REPORT.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn branches_on_report_type() {
        let emp = Employee::new("John", "101");
        let perf = Performance::new();

        assert_eq!(perf.generate_report("PDF", &emp), "Generating PDF report.");
        assert_eq!(perf.generate_report("Word", &emp), "Generating Word report.");
        assert_eq!(perf.generate_report("Excel", &emp), "Report type not supported.");
        assert_eq!(perf.generate_report("pdf", &emp), "Report type not supported.");
    }
}
