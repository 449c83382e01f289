use std::path::PathBuf;

use clap::{Parser, Subcommand};
use passport_core::{Band, ClassFilter, FilterSpec, SortMode};

#[derive(Parser, Debug)]
#[command(name = "passport", about = "Provenance and rarity views over a GBz collection snapshot")]
pub struct Cli {
    /// Snapshot file captured from a full node
    #[arg(long, short)]
    pub snapshot: PathBuf,
    /// Deployment config (TOML)
    #[arg(long, short)]
    pub config: Option<PathBuf>,
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Items held by a wallet
    Owned {
        /// Wallet address
        address: String,
        /// Class id, or "all"
        #[arg(long, default_value = "all")]
        class: ClassFilter,
        /// Points band: all, low (<= 25), high (> 25)
        #[arg(long, default_value = "all")]
        points: Band,
        /// Passport band: all, low (<= 10 stamps), high (> 10)
        #[arg(long, default_value = "all")]
        passport: Band,
        /// none, rarity-high (rarest first), rarity-low (commonest first)
        #[arg(long, default_value = "none")]
        sort: SortMode,
    },
    /// A wallet's stamps across the collection
    Bloodline {
        /// Wallet address
        address: String,
    },
    /// One item with its full passport
    Item {
        /// Object id
        object_id: String,
    },
    /// Collection counters
    Stats,
}

impl Command {
    /// Filter selection of an `owned` command
    pub fn filter_spec(&self) -> Option<(FilterSpec, SortMode)> {
        match self {
            Self::Owned {
                class,
                points,
                passport,
                sort,
                ..
            } => Some((
                FilterSpec::default()
                    .with_class(*class)
                    .with_points(*points)
                    .with_provenance(*passport),
                *sort,
            )),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owned_defaults() {
        let cli = Cli::try_parse_from(["passport", "--snapshot", "s.json", "owned", "0xabc"]).unwrap();
        let (spec, sort) = cli.command.filter_spec().unwrap();
        assert!(spec.is_unfiltered());
        assert_eq!(sort, SortMode::None);
        assert!(!cli.json);
    }

    #[test]
    fn test_owned_with_filters() {
        let cli = Cli::try_parse_from([
            "passport", "-s", "s.json", "owned", "0xabc", "--class", "2", "--points", "high",
            "--passport", "low", "--sort", "rarity-high",
        ])
        .unwrap();
        let (spec, sort) = cli.command.filter_spec().unwrap();
        assert_eq!(spec.class, ClassFilter::Only(2));
        assert_eq!(spec.points, Band::High);
        assert_eq!(spec.provenance, Band::Low);
        assert_eq!(sort, SortMode::RarestFirst);
    }

    #[test]
    fn test_rejects_unknown_band() {
        let result = Cli::try_parse_from([
            "passport", "-s", "s.json", "owned", "0xabc", "--points", "medium",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_other_commands_have_no_filter() {
        let cli = Cli::try_parse_from(["passport", "-s", "s.json", "bloodline", "0xabc"]).unwrap();
        assert!(cli.command.filter_spec().is_none());
        assert!(matches!(cli.command, Command::Bloodline { .. }));
    }
}
