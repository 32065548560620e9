use crate::config::{SessionConfig, DEFAULT_BANKROLL, DEFAULT_BET_UNIT};
use crate::variant::Variant;
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

/// Five-card draw video poker.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Paytable to start with (e.g. jacks-or-better, all-american, jacks-9-5)
    #[arg(long, default_value = "jacks-or-better")]
    pub variant: Variant,

    /// Seed the deck for a reproducible session
    #[arg(long)]
    pub seed: Option<u64>,

    /// Smallest bet; keys 1-5 bet multiples of it
    #[arg(long, default_value_t = DEFAULT_BET_UNIT)]
    pub bet_unit: u64,

    /// Chips at the start of every session
    #[arg(long, default_value_t = DEFAULT_BANKROLL)]
    pub bankroll: u64,

    /// Line-oriented mode instead of the full-screen UI
    #[arg(long)]
    pub plain: bool,

    /// Write the log to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// off, error, warn, info, debug or trace
    #[arg(long, default_value = "info")]
    pub log_level: LevelFilter,
}

impl Cli {
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            starting_bankroll: self.bankroll,
            bet_unit: self.bet_unit,
            variant: self.variant,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_session_defaults() {
        let cli = Cli::try_parse_from(["video-poker"]).unwrap();
        assert_eq!(cli.session_config(), SessionConfig::default());
        assert_eq!(cli.log_level, LevelFilter::Info);
        assert!(!cli.plain);
        assert_eq!(cli.seed, None);
    }

    #[test]
    fn parses_every_option() {
        let cli = Cli::try_parse_from([
            "video-poker",
            "--variant",
            "all-american",
            "--seed",
            "42",
            "--bet-unit",
            "5",
            "--bankroll",
            "200",
            "--plain",
            "--log-file",
            "poker.log",
            "--log-level",
            "debug",
        ])
        .unwrap();
        let config = cli.session_config();
        assert_eq!(config.variant, Variant::AllAmerican);
        assert_eq!(config.bet_unit, 5);
        assert_eq!(config.starting_bankroll, 200);
        assert_eq!(cli.seed, Some(42));
        assert!(cli.plain);
        assert_eq!(cli.log_file, Some(PathBuf::from("poker.log")));
        assert_eq!(cli.log_level, LevelFilter::Debug);
    }

    #[test]
    fn rejects_unknown_variant() {
        assert!(Cli::try_parse_from(["video-poker", "--variant", "pai-gow"]).is_err());
    }
}
