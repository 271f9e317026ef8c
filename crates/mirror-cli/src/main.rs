//! Folder mirror CLI
//!
//! `sync-folders <SOURCE> <REPLICA> <INTERVAL> <LOG_FILE>` mirrors SOURCE onto
//! REPLICA, then sleeps INTERVAL seconds, forever.

mod cli;
mod error;
mod logging;

use clap::Parser;

use cli::Cli;
use error::Result;
use mirror_core::Scheduler;

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    let config = cli.to_config();
    config.validate()?;
    tracing::debug!(?config, "Starting mirror");

    let scheduler = Scheduler::new(config);
    if cli.once {
        let report = scheduler.run_pass();
        tracing::info!("{report}");
        return Ok(());
    }
    scheduler.run_forever()
}
