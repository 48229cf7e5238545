//! CLI entry point for salut.

mod cli;

use clap::Parser;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = std::env::var("SALUT_LOG")
        .ok()
        .and_then(|spec| EnvFilter::try_new(spec).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}

fn main() {
    init_tracing();
    let args = cli::Args::parse();
    let options = args.run_options();

    let code = match args.command {
        Some(cli::Command::Init { force }) => salut::app::run_init(&options, force),
        None => salut::app::run(&options),
    };
    std::process::exit(code);
}
