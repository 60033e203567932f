use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "pscope",
    about = "Structural analysis of chemical patent claims",
    version,
    author,
    before_help = crate::display::banner_for_help(),
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a claim set and print its dependency tree
    #[command(visible_alias = "c")]
    Claims(ClaimsArgs),

    /// Count combinations and enumerate examples of Markush structures
    #[command(visible_alias = "m")]
    Markush(MarkushArgs),

    /// Measure how much of a molecule sample the patent's structures cover
    #[command(visible_alias = "cov")]
    Coverage(CoverageArgs),
}

impl Command {
    pub fn io(&self) -> &IoOptions {
        match self {
            Command::Claims(args) => &args.io,
            Command::Markush(args) => &args.io,
            Command::Coverage(args) => &args.io,
        }
    }
}

/// I/O options shared by all commands.
#[derive(Args)]
pub struct IoOptions {
    /// Patent document (JSON; stdin if omitted)
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Report file (stdout if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Suppress progress output (for scripting)
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Analysis settings shared by the markush and coverage commands.
#[derive(Args)]
#[command(next_help_heading = "Analysis Settings")]
pub struct ConfigOptions {
    /// Custom analysis settings (TOML file)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct ClaimsArgs {
    #[command(flatten)]
    pub io: IoOptions,

    /// Print only the tree rooted at this claim
    #[arg(long, value_name = "N")]
    pub root: Option<u32>,
}

#[derive(Args)]
pub struct MarkushArgs {
    #[command(flatten)]
    pub io: IoOptions,

    /// Only analyse the structure with this id
    #[arg(long = "structure", value_name = "ID")]
    pub structure_id: Option<String>,

    /// Maximum examples per structure (settings default if omitted)
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,

    #[command(flatten)]
    pub settings: ConfigOptions,
}

#[derive(Args)]
pub struct CoverageArgs {
    #[command(flatten)]
    pub io: IoOptions,

    /// Molecule sample, one SMILES per line ('#' starts a comment)
    #[arg(long, value_name = "FILE")]
    pub sample: PathBuf,

    #[command(flatten)]
    pub settings: ConfigOptions,
}

pub fn parse() -> Cli {
    Cli::parse()
}
