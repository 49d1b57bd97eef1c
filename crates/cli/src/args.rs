use clap::Args;
use gdcx_codec::InvalidGroupPolicy;
use std::path::PathBuf;

use crate::defaults;

#[derive(Args, Debug)]
pub struct CompressArgs {
    /// Genetic data file to compress (bases T, C, G, A in either case)
    #[arg(short, long, required_unless_present = "show_table")]
    pub file: Option<PathBuf>,

    /// Output path
    ///
    /// Defaults to the input path with ".cx" appended.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// How to handle groups containing bytes other than T, C, G, A
    ///
    /// validate: reject the whole input before writing anything.
    /// reject: stop at the first bad group.
    /// skip: drop bad groups silently (the output can no longer be decoded exactly).
    #[arg(long, default_value = defaults::INVALID_GROUP_POLICY)]
    pub on_invalid: InvalidGroupPolicy,

    /// Encode large inputs on multiple threads
    #[arg(long)]
    pub parallel: bool,

    /// Print the permutation table and exit
    #[arg(long, conflicts_with = "file")]
    pub show_table: bool,

    /// Print the result as JSON instead of status lines
    #[arg(long)]
    pub json: bool,
}
