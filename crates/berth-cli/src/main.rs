//! Berth CLI - install charts through a release server

use clap::{Parser, Subcommand};
use miette::Result;

mod args;
mod commands;
mod display;
mod endpoint;
mod error;
mod exit_codes;
mod instrument;

#[derive(Parser)]
#[command(name = "berth")]
#[command(author = "Berth Contributors")]
#[command(version)]
#[command(about = "Install charts through a berth release server", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Show full release details
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable debug output
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Install a chart archive
    #[command(long_about = commands::install::INSTALL_DESC)]
    Install {
        /// Chart path or name in the current directory
        #[arg(value_name = "CHART")]
        args: Vec<String>,

        /// Address of the release server (default ":44134", or $BERTH_HOST)
        #[arg(long, default_value = "", hide_default_value = true)]
        host: String,

        /// Simulate an install
        #[arg(long)]
        dry_run: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Setup miette for nice error display
    miette::set_panic_hook();

    let cli = Cli::parse();
    instrument::init(cli.debug);

    let result = match cli.command {
        Commands::Install {
            args,
            host,
            dry_run,
        } => commands::install::run(&args, &host, dry_run, cli.verbose).await,
    };

    if let Err(err) = result {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }

    Ok(())
}
