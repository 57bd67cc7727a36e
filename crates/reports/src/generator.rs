//! Report dispatch by strategy.

use solidforge_payroll::Employee;

use crate::kind::{PDF_REPORT, ReportKind, UNSUPPORTED_REPORT, WORD_REPORT};

/// One report format.
pub trait ReportGenerator: core::fmt::Debug {
    fn generate(&self, employee: &Employee) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PdfReportGenerator;

impl ReportGenerator for PdfReportGenerator {
    fn generate(&self, _employee: &Employee) -> String {
        PDF_REPORT.to_string()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WordReportGenerator;

impl ReportGenerator for WordReportGenerator {
    fn generate(&self, _employee: &Employee) -> String {
        WORD_REPORT.to_string()
    }
}

/// Fallback for unknown report types.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedReportGenerator;

impl ReportGenerator for UnsupportedReportGenerator {
    fn generate(&self, _employee: &Employee) -> String {
        UNSUPPORTED_REPORT.to_string()
    }
}

impl From<ReportKind> for Box<dyn ReportGenerator> {
    fn from(kind: ReportKind) -> Self {
        match kind {
            ReportKind::Pdf => Box::new(PdfReportGenerator),
            ReportKind::Word => Box::new(WordReportGenerator),
        }
    }
}

/// Pick the generator for an exact report-type key. Unknown keys get
/// [`UnsupportedReportGenerator`].
pub fn generator_for(report_type: &str) -> Box<dyn ReportGenerator> {
    match report_type.parse::<ReportKind>() {
        Ok(kind) => kind.into(),
        Err(_) => Box::new(UnsupportedReportGenerator),
    }
}

/// Generates reports without knowing any format.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportService;

impl ReportService {
    pub fn new() -> Self {
        Self
    }

    pub fn generate_report(&self, generator: &dyn ReportGenerator, employee: &Employee) -> String {
        tracing::debug!(?generator, employee = employee.name(), "generating report");
        generator.generate(employee)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::performance::Performance;

    fn john() -> Employee {
        Employee::new("John", "101")
    }

    #[test]
    fn each_generator_produces_its_format() {
        let service = ReportService::new();
        let emp = john();

        assert_eq!(service.generate_report(&PdfReportGenerator, &emp), PDF_REPORT);
        assert_eq!(service.generate_report(&WordReportGenerator, &emp), WORD_REPORT);
        assert_eq!(
            service.generate_report(&UnsupportedReportGenerator, &emp),
            UNSUPPORTED_REPORT
        );
    }

    #[test]
    fn new_formats_plug_in_without_touching_the_service() {
        #[derive(Debug)]
        struct MarkdownReportGenerator;

        impl ReportGenerator for MarkdownReportGenerator {
            fn generate(&self, employee: &Employee) -> String {
                format!("# Report for {}", employee.name())
            }
        }

        let out = ReportService::new().generate_report(&MarkdownReportGenerator, &john());
        assert_eq!(out, "# Report for John");
    }

    #[test]
    fn generator_for_unknown_falls_back() {
        let out = ReportService::new().generate_report(&*generator_for("Excel"), &john());
        assert_eq!(out, UNSUPPORTED_REPORT);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: both dispatchers agree for any report-type string.
            #[test]
            fn strategy_matches_string_dispatch(
                report_type in prop_oneof![
                    Just("PDF".to_string()),
                    Just("Word".to_string()),
                    "[A-Za-z]{0,8}"
                ]
            ) {
                let emp = john();
                let by_string = Performance::new().generate_report(&report_type, &emp);
                let by_strategy = ReportService::new()
                    .generate_report(&*generator_for(&report_type), &emp);
                prop_assert_eq!(by_string, by_strategy);
            }
        }
    }
}
