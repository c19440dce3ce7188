use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod core;
mod db;
mod parsing;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("allele_db=debug,info")
    } else {
        EnvFilter::new("allele_db=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    cli::digest::run(&cli)
}
