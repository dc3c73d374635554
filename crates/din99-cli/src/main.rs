//! din99 - Lab <-> DIN99 colour conversion CLI

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use din99_color::{Conversion, KFactors};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "din99")]
#[command(author, version, about = "Convert colours between CIE Lab and DIN99")]
#[command(long_about = "
Converts CIE L*a*b* colours to the DIN99 uniform colour space and back,
and computes DIN99 colour differences.

Examples:
  din99 to-din99 37.9856291 -23.62907688 -4.41746615
  din99 to-lab 49.60101649 -16.23145729 1.07618123
  din99 to-din99 50 20 -30 --k-e 2 --k-ch 0.5
  din99 convert -i colours.txt                 # one Lab triple per line
  din99 convert -d din99-to-lab < din99.txt
  din99 delta 60.2574 -34.0099 36.2677 60.4626 -34.1751 39.4387 --textiles
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (repeat for more detail)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,

    /// Decimal places in printed values
    #[arg(long, global = true, default_value = "8")]
    precision: usize,

    /// Machine-readable output (JSON)
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert one Lab triple to DIN99
    #[command(name = "to-din99", visible_alias = "f")]
    ToDin99(TripleArgs),

    /// Convert one DIN99 triple to Lab
    #[command(name = "to-lab", visible_alias = "i")]
    ToLab(TripleArgs),

    /// Convert triples read line by line from a file or stdin
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),

    /// DIN99 colour difference of two Lab triples
    #[command(visible_alias = "d")]
    Delta(DeltaArgs),
}

#[derive(Args, Clone, Copy)]
struct FactorArgs {
    /// Parametric lightness factor k_E
    #[arg(long = "k-e", default_value = "1.0")]
    k_e: f64,

    /// Parametric chroma factor k_CH
    #[arg(long = "k-ch", default_value = "1.0")]
    k_ch: f64,
}

impl FactorArgs {
    fn factors(self) -> Result<KFactors> {
        KFactors::new(self.k_e, self.k_ch).context("Invalid parametric factors")
    }
}

#[derive(Args)]
struct TripleArgs {
    /// Channel values
    #[arg(required = true, num_args = 3, allow_negative_numbers = true, value_names = ["L", "A", "B"])]
    values: Vec<f64>,

    #[command(flatten)]
    factors: FactorArgs,
}

#[derive(Args)]
struct ConvertArgs {
    /// Direction: lab-to-din99 (Lab_to_DIN99) or din99-to-lab (DIN99_to_Lab)
    #[arg(short, long, default_value = "lab-to-din99")]
    direction: Conversion,

    /// Input file with one triple per line (stdin if omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    #[command(flatten)]
    factors: FactorArgs,
}

#[derive(Args)]
struct DeltaArgs {
    /// Two Lab triples: L1 a1 b1 L2 a2 b2
    #[arg(required = true, num_args = 6, allow_negative_numbers = true)]
    values: Vec<f64>,

    /// Use textile factors (k_E = 2, k_CH = 0.5)
    #[arg(short, long)]
    textiles: bool,
}

/// Output settings shared by all commands.
#[derive(Clone, Copy)]
struct OutputOpts {
    precision: usize,
    json: bool,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    let out = OutputOpts {
        precision: cli.precision,
        json: cli.json,
    };

    match cli.command {
        Commands::ToDin99(args) => commands::convert::run_single(Conversion::LabToDin99, args, out),
        Commands::ToLab(args) => commands::convert::run_single(Conversion::Din99ToLab, args, out),
        Commands::Convert(args) => commands::convert::run_stream(args, out),
        Commands::Delta(args) => commands::delta::run(args, out),
    }
}
