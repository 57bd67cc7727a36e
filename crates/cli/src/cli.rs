use clap::{Args, Parser, Subcommand};

use solidforge_observability::LogFormat;

use crate::demos;

#[derive(Debug, Parser)]
#[command(name = "solidforge", about = "Design pattern and SOLID examples", long_about = None)]
pub struct Cli {
    /// Log output format (`pretty` or `json`)
    #[arg(long, global = true, env = "SOLIDFORGE_LOG_FORMAT", default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Build a product with the validating builder
    Builder(BuilderArgs),
    /// Pay the standard roster
    Payroll,
    /// Place orders through coupled and injected notifiers
    Notify,
    /// Generate reports through both dispatchers
    Reports(ReportsArgs),
    /// Trait default methods, composition and abstract-base examples
    Capabilities,
    /// Run every example in order
    All,
}

#[derive(Debug, Clone, Args)]
pub struct BuilderArgs {
    /// Print the built product as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Args)]
pub struct ReportsArgs {
    /// Report type key; repeat for several
    #[arg(long = "kind", default_values_t = ["PDF".to_string(), "Word".to_string()])]
    pub kinds: Vec<String>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<Vec<String>> {
        self.command.run()
    }
}

impl Command {
    pub fn run(self) -> anyhow::Result<Vec<String>> {
        tracing::debug!(command = ?self, "running demo");
        match self {
            Command::Builder(args) => demos::builder(args.json),
            Command::Payroll => Ok(demos::payroll()),
            Command::Notify => demos::notify(),
            Command::Reports(args) => Ok(demos::reports(&args.kinds)),
            Command::Capabilities => Ok(demos::capabilities()),
            Command::All => demos::all(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_defaults_to_pdf_and_word() {
        let cli = Cli::try_parse_from(["solidforge", "reports"]).unwrap();
        match cli.command {
            Command::Reports(args) => assert_eq!(args.kinds, vec!["PDF", "Word"]),
            other => panic!("Expected Reports, got {other:?}"),
        }
    }

    #[test]
    fn reports_accepts_repeated_kind() {
        let cli =
            Cli::try_parse_from(["solidforge", "reports", "--kind", "Word", "--kind", "Excel"])
                .unwrap();
        match cli.command {
            Command::Reports(args) => assert_eq!(args.kinds, vec!["Word", "Excel"]),
            other => panic!("Expected Reports, got {other:?}"),
        }
    }

    #[test]
    fn parses_log_format_flag() {
        let cli = Cli::try_parse_from(["solidforge", "payroll", "--log-format", "json"]).unwrap();
        assert_eq!(cli.log_format, LogFormat::Json);
    }

    #[test]
    fn rejects_unknown_log_format() {
        assert!(Cli::try_parse_from(["solidforge", "payroll", "--log-format", "xml"]).is_err());
    }
}
