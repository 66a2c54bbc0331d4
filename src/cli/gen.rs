use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct GenArgs {
    /// Target size of the generated values, in GiB.
    #[arg(long, default_value_t = 1)]
    pub size: u64,
    /// Number of distinct keys, or -1 to key every row by its index.
    #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
    pub keys: i64,
    /// The output file path.
    #[arg(long = "dataDir", visible_alias = "data-dir", default_value = "/tmp/table.dat")]
    pub data_dir: PathBuf,
    /// Key skew; 0 draws keys uniformly.
    #[arg(long, default_value_t = 0.0)]
    pub skewness: f64,
    /// Seed for the random source. Drawn from entropy when absent.
    #[arg(long)]
    pub seed: Option<u64>,
}
