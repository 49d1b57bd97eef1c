mod args;
mod commands;
pub mod defaults;
mod logging;
mod printing;
mod utils;

use anyhow::Result;
use clap::{ArgAction, Parser};

use args::CompressArgs;
use commands::{compress, table};

/// gDCx: Genetic Data Compression Utility
///
/// Packs every four bases (T, C, G, A) of a file into one byte using a fixed
/// permutation table, writing the result next to the input with a ".cx"
/// extension.
#[derive(Parser, Debug)]
#[command(name = "gdcx")]
#[command(author, version, about = "Genetic Data Compression Utility", long_about = None)]
struct Cli {
    /// Number of threads to use with --parallel
    ///
    /// If not specified, defaults to the number of logical CPUs.
    #[arg(short = 't', long)]
    threads: Option<usize>,

    /// Increase log verbosity on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Suppress status lines
    #[arg(short, long)]
    quiet: bool,

    #[command(flatten)]
    compress: CompressArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.verbose)?;

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }

    if cli.compress.show_table {
        return table::show_table(cli.compress.json);
    }

    match &cli.compress.file {
        Some(file) => compress::compress_file(file, &cli.compress, cli.quiet),
        None => anyhow::bail!("No input file given (use -f <FILE>)"),
    }
}
