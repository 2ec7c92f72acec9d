//! Command-line interface for strictly_monty.

use clap::{Parser, Subcommand, ValueEnum};
use strictly_monty::{RevealPolicy, Strategy};

/// Strictly Monty - the Monty Hall game with keep/switch statistics
#[derive(Parser, Debug)]
#[command(name = "strictly_monty")]
#[command(about = "Play or simulate the Monty Hall game", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// RNG seed (overrides the config file)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Host tie-break rule (overrides the config file)
    #[arg(long, global = true, value_enum)]
    pub reveal_policy: Option<RevealPolicyArg>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Print views and statistics as JSON lines
        #[arg(long)]
        json: bool,
    },

    /// Play many rounds with a fixed strategy and report the win rates
    Simulate {
        /// Decision pattern to play
        #[arg(short, long, value_enum, default_value = "switch")]
        strategy: StrategyArg,

        /// Number of rounds (defaults to the config file's simulation_rounds)
        #[arg(short, long)]
        rounds: Option<u64>,

        /// Print the statistics as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Strategy names accepted on the command line
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum StrategyArg {
    /// Never switch
    Keep,
    /// Always switch
    Switch,
    /// Keep or switch at random
    Random,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Keep => Strategy::AlwaysKeep,
            StrategyArg::Switch => Strategy::AlwaysSwitch,
            StrategyArg::Random => Strategy::Random,
        }
    }
}

/// Reveal policy names accepted on the command line
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum RevealPolicyArg {
    /// Open the lower-numbered goat door
    LowestDoor,
    /// Open either goat door at random
    Uniform,
}

impl From<RevealPolicyArg> for RevealPolicy {
    fn from(arg: RevealPolicyArg) -> Self {
        match arg {
            RevealPolicyArg::LowestDoor => RevealPolicy::LowestDoor,
            RevealPolicyArg::Uniform => RevealPolicy::Uniform,
        }
    }
}
