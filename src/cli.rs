use std::time::Duration;

use clap::Parser;
use watchman::{ChainMode, WatchConfig, WatchmanResult};

/// Watchman - run commands when a file is written
#[derive(Parser, Debug)]
#[command(name = "watchman")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The file to watch for changes
    #[arg(long)]
    pub file: String,

    /// The command to run on file change events
    #[arg(long)]
    pub command: String,

    /// Split the command string on "&&"; each command runs only if the previous one succeeded
    #[arg(long, conflicts_with = "split_then")]
    pub split_and: bool,

    /// Split the command string on ";"; each command runs regardless of the previous one
    #[arg(long)]
    pub split_then: bool,

    /// Minimum milliseconds between handled write events (0 disables debouncing)
    #[arg(long, default_value_t = 0, value_name = "MS")]
    pub ms_gap: u64,

    /// Run the commands once at startup, before any write event
    #[arg(long)]
    pub start: bool,

    /// Wait for each command except the last before starting the next
    #[arg(long)]
    pub sync: bool,

    /// Output events as NDJSON on stdout
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Resolve the flags into a validated configuration
    pub fn watch_config(&self) -> WatchmanResult<WatchConfig> {
        let chain_mode = ChainMode::from_flags(self.split_and, self.split_then)?;

        Ok(WatchConfig::new(self.file.as_str(), self.command.as_str())?
            .with_chain_mode(chain_mode)
            .with_min_gap(Duration::from_millis(self.ms_gap))
            .with_run_at_start(self.start)
            .with_sync(self.sync))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use watchman::WatchmanError;

    #[test]
    fn test_cli_parse_minimal() {
        let cli = Cli::try_parse_from(["watchman", "--file", "notes.txt", "--command", "make"]).unwrap();
        assert_eq!(cli.file, "notes.txt");
        assert_eq!(cli.command, "make");
        assert_eq!(cli.ms_gap, 0);
        assert!(!cli.split_and && !cli.split_then && !cli.start && !cli.sync);
    }

    #[test]
    fn test_cli_parse_all_flags() {
        let cli = Cli::try_parse_from([
            "watchman",
            "--file",
            "notes.txt",
            "--command",
            "make; make test",
            "--split-then",
            "--ms-gap",
            "500",
            "--start",
            "--sync",
            "--json",
            "-vv",
        ])
        .unwrap();

        assert!(cli.split_then);
        assert_eq!(cli.ms_gap, 500);
        assert!(cli.start && cli.sync && cli.json);
        assert_eq!(cli.verbose, 2);

        let config = cli.watch_config().unwrap();
        assert_eq!(config.chain_mode(), ChainMode::Then);
        assert_eq!(config.min_gap(), Duration::from_millis(500));
        assert!(config.run_at_start() && config.sync());
    }

    #[test]
    fn test_cli_requires_file_and_command() {
        assert!(Cli::try_parse_from(["watchman", "--command", "make"]).is_err());
        assert!(Cli::try_parse_from(["watchman", "--file", "notes.txt"]).is_err());
    }

    #[test]
    fn test_cli_rejects_both_split_modes() {
        let result = Cli::try_parse_from([
            "watchman",
            "--file",
            "notes.txt",
            "--command",
            "a && b",
            "--split-and",
            "--split-then",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_rejects_negative_gap() {
        let result = Cli::try_parse_from([
            "watchman", "--file", "notes.txt", "--command", "make", "--ms-gap", "-5",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_watch_config_rejects_empty_values() {
        let cli = Cli::try_parse_from(["watchman", "--file", "", "--command", "make"]).unwrap();
        assert!(matches!(cli.watch_config(), Err(WatchmanError::MissingFile)));

        let cli = Cli::try_parse_from(["watchman", "--file", "notes.txt", "--command", ""]).unwrap();
        assert!(matches!(cli.watch_config(), Err(WatchmanError::MissingCommand)));
    }
}
