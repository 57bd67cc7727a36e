use clap::Parser;

use solidforge_cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    solidforge_observability::init(cli.log_format);

    let lines = cli.run().inspect_err(|e| tracing::error!(error = %e, "demo failed"))?;
    for line in lines {
        println!("{line}");
    }

    Ok(())
}
