//! CLI argument parsing using clap derive

use clap::Parser;

use mirror_core::{PruneMode, SyncConfig, parse_interval};
use std::path::PathBuf;
use std::time::Duration;

/// Periodically mirror a source folder onto a replica folder
#[derive(Parser, Debug)]
#[command(name = "sync-folders")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Folder to copy from
    pub source_folder: PathBuf,

    /// Folder to make identical to the source
    pub replica_folder: PathBuf,

    /// Seconds to wait between passes (parsed like C atoi; junk means 0)
    #[arg(allow_hyphen_values = true)]
    pub interval: String,

    /// File to append copy/delete records and pass banners to
    pub log_file: PathBuf,

    /// Run a single pass and exit
    #[arg(long)]
    pub once: bool,

    /// Remove stale replica directories together with their contents
    #[arg(long)]
    pub prune_recursive: bool,

    /// Enable verbose diagnostics on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Build the mirror configuration from parsed arguments.
    pub fn to_config(&self) -> SyncConfig {
        let seconds = parse_interval(&self.interval);
        if seconds == 0 && self.interval.trim() != "0" {
            tracing::warn!(interval = %self.interval, "Interval is not a positive number; passes will run back to back");
        }

        let prune_mode = if self.prune_recursive {
            PruneMode::Recursive
        } else {
            PruneMode::SingleEntry
        };

        SyncConfig::new(
            &self.source_folder,
            &self.replica_folder,
            Duration::from_secs(seconds),
            &self.log_file,
        )
        .with_prune_mode(prune_mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_positionals_parse() {
        let cli = Cli::try_parse_from(["sync-folders", "src", "dst", "5", "sync.log"]).unwrap();
        let config = cli.to_config();

        assert_eq!(config.source, PathBuf::from("src"));
        assert_eq!(config.replica, PathBuf::from("dst"));
        assert_eq!(config.interval, Duration::from_secs(5));
        assert_eq!(config.log_file, PathBuf::from("sync.log"));
        assert_eq!(config.prune_mode, PruneMode::SingleEntry);
        assert!(!cli.once);
    }

    #[test]
    fn missing_positional_is_rejected() {
        assert!(Cli::try_parse_from(["sync-folders", "src", "dst", "5"]).is_err());
    }

    #[test]
    fn extra_positional_is_rejected() {
        assert!(
            Cli::try_parse_from(["sync-folders", "src", "dst", "5", "log", "extra"]).is_err()
        );
    }

    #[test]
    fn non_numeric_interval_means_zero() {
        let cli = Cli::try_parse_from(["sync-folders", "src", "dst", "soon", "log"]).unwrap();
        assert_eq!(cli.to_config().interval, Duration::ZERO);
    }

    #[test]
    fn negative_interval_is_accepted_as_zero() {
        let cli = Cli::try_parse_from(["sync-folders", "src", "dst", "-3", "log"]).unwrap();
        assert_eq!(cli.to_config().interval, Duration::ZERO);
    }

    #[test]
    fn flags_select_options() {
        let cli = Cli::try_parse_from([
            "sync-folders",
            "--once",
            "--prune-recursive",
            "-v",
            "src",
            "dst",
            "1",
            "log",
        ])
        .unwrap();

        assert!(cli.once);
        assert!(cli.verbose);
        assert_eq!(cli.to_config().prune_mode, PruneMode::Recursive);
    }
}
