use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// The path to the generated file.
    #[arg(short, long)]
    pub file: PathBuf,
    /// Key cardinality the file was generated with. With -1, keys must count up from 0.
    #[arg(short, long, allow_negative_numbers = true)]
    pub keys: Option<i64>,
    /// Also require keys to lie in [0, keys).
    #[arg(long)]
    pub strict_range: bool,
    /// The size in GiB the file was generated with; fixes the expected row count.
    #[arg(short, long)]
    pub size: Option<u64>,
}
