use clap::Parser;
use miette::Result;
use tracing_subscriber::EnvFilter;
use usfm_verify::cli::{Cli, Commands};
use usfm_verify::output::Printer;

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let printer = Printer::new();

    match cli.command {
        Commands::Verify(args) => {
            let outcome = usfm_verify::cli::verify::run(args, &printer)?;
            if outcome.summary.has_errors() {
                std::process::exit(1);
            }
        }
        Commands::Tokens(args) => usfm_verify::cli::tokens::run(args, &printer)?,
        Commands::Books(args) => usfm_verify::cli::books::run(args, &printer)?,
        Commands::Completions(args) => usfm_verify::cli::completions::run(args)?,
    }

    Ok(())
}
