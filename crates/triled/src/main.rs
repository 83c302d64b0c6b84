//! TriLED CLI — drive the LED arbitration service from the command line.
//!
//! The CLI stands in for the platform dispatch layer: it opens the sysfs
//! sink, hands it to the service and issues a single request per invocation.

use std::path::PathBuf;

use clap::Parser;

mod cli;

#[derive(Parser)]
#[command(
    name = "triled",
    version,
    about = "Tri-color LED and backlight arbitration over sysfs LED class devices"
)]
struct Args {
    /// Output as JSON (for kinds)
    #[arg(long, global = true)]
    json: bool,

    /// TOML file overriding the sysfs channel paths
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: cli::Command,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let args = Args::parse();

    if let Err(e) = cli::run(args.command, args.json, args.config.as_deref()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
