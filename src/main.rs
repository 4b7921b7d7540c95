use clap::Parser;

use cardprep::config::Config;
use cardprep::pipeline;

#[derive(Parser)]
#[command(
    name = "cardprep",
    about = "Rewrite unit separators in the flds field of card3start.json into cards3end.json"
)]
struct Cli {
    /// Write debug logs to stderr.
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(cli.debug)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    let config = Config::defaults();
    let summary = pipeline::run(&config)?;

    println!("{}", pipeline::completion_message(&summary.output));
    Ok(())
}
