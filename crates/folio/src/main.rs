mod app;
mod cli;
mod commands;
mod config;
mod content;
mod render;
mod source;
mod theme;
mod viewer;
mod watch;

use clap::Parser;
use colored::Colorize;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();

    let level = if cli.quiet {
        "error"
    } else {
        match cli.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };
    // Handle kept alive for the process; dropping it would stop logging.
    let _logger = flexi_logger::Logger::try_with_env_or_str(level)
        .and_then(|logger| logger.start())
        .map_err(|err| eprintln!("failed to initialize logging: {err}"))
        .ok();

    if cli.no_color {
        colored::control::set_override(false);
    }

    if let Err(err) = cli.run() {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}
