use core::str::FromStr;

use serde::{Deserialize, Serialize};

use solidforge_core::DomainError;

pub const PDF_REPORT: &str = "Generating PDF report.";
pub const WORD_REPORT: &str = "Generating Word report.";
pub const UNSUPPORTED_REPORT: &str = "Report type not supported.";

/// Supported report formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportKind {
    #[serde(rename = "PDF")]
    Pdf,
    #[serde(rename = "Word")]
    Word,
}

impl ReportKind {
    pub const ALL: [ReportKind; 2] = [ReportKind::Pdf, ReportKind::Word];

    /// The exact report-type key (`"PDF"` or `"Word"`).
    pub fn as_str(self) -> &'static str {
        match self {
            ReportKind::Pdf => "PDF",
            ReportKind::Word => "Word",
        }
    }

    /// Case-insensitive match, for user-facing input.
    pub fn parse_lenient(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(raw))
    }
}

impl core::fmt::Display for ReportKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive match on the report-type key.
impl FromStr for ReportKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PDF" => Ok(ReportKind::Pdf),
            "Word" => Ok(ReportKind::Word),
            other => Err(DomainError::validation(format!(
                "unsupported report type: {other:?}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_exact_keys_only() {
        assert_eq!("PDF".parse::<ReportKind>().unwrap(), ReportKind::Pdf);
        assert_eq!("Word".parse::<ReportKind>().unwrap(), ReportKind::Word);
        assert!("pdf".parse::<ReportKind>().is_err());
        assert!("WORD".parse::<ReportKind>().is_err());
        assert!("".parse::<ReportKind>().is_err());
    }

    #[test]
    fn lenient_parse_ignores_case_and_whitespace() {
        assert_eq!(ReportKind::parse_lenient(" pdf "), Some(ReportKind::Pdf));
        assert_eq!(ReportKind::parse_lenient("WORD"), Some(ReportKind::Word));
        assert_eq!(ReportKind::parse_lenient("Excel"), None);
    }

    #[test]
    fn display_matches_key() {
        for kind in ReportKind::ALL {
            assert_eq!(kind.to_string().parse::<ReportKind>().unwrap(), kind);
        }
    }
}
