//! Command-line interface for strictly_grid.

use clap::Parser;
use std::path::PathBuf;
use strictly_grid::Controller;

/// Strictly Grid - generalized tic-tac-toe in the terminal
///
/// Settings not given as flags come from the settings file, and anything
/// still missing is asked for interactively.
#[derive(Parser, Debug, Default)]
#[command(name = "strictly_grid")]
#[command(about = "Tic-tac-toe on an N×N board for 2-3 players", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Board edge length (3-10)
    #[arg(short = 'n', long)]
    pub size: Option<usize>,

    /// Game mode: 1 = User vs User, 2 = User vs Computer, 3 = Multi-Player
    #[arg(short, long)]
    pub mode: Option<u8>,

    /// Controllers for mode 3, comma separated (e.g. human,computer,human)
    #[arg(long, value_delimiter = ',')]
    pub players: Option<Vec<Controller>>,

    /// Move log file, truncated when a game starts
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Seed for computer players (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Path to the settings file
    #[arg(short, long, default_value = "strictly_grid.toml")]
    pub config: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_flags() {
        let cli = Cli::try_parse_from([
            "strictly_grid",
            "-n",
            "5",
            "--mode",
            "3",
            "--players",
            "human,computer,Computer",
            "--seed",
            "42",
            "--log-file",
            "moves.txt",
        ])
        .unwrap();

        assert_eq!(cli.size, Some(5));
        assert_eq!(cli.mode, Some(3));
        assert_eq!(
            cli.players,
            Some(vec![
                Controller::Human,
                Controller::Computer,
                Controller::Computer
            ])
        );
        assert_eq!(cli.seed, Some(42));
        assert_eq!(cli.log_file, Some(PathBuf::from("moves.txt")));
        assert_eq!(cli.config, PathBuf::from("strictly_grid.toml"));
    }

    #[test]
    fn test_rejects_unknown_controller() {
        assert!(Cli::try_parse_from(["strictly_grid", "--players", "robot"]).is_err());
    }
}
