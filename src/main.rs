use clap::Parser;
use log::{error, info, LevelFilter};
use log4rs::{
    append::console::{ConsoleAppender, Target},
    config::{Appender, Root},
    encode::json::JsonEncoder,
};
use std::process::ExitCode;

mod check;
mod cli;
mod error;
mod generate;
mod keys;
mod request;

use error::{Error, Result};

const ONE_GIB: u64 = 1073741824;
/// Length of the random value in every row.
const VALUE_LEN: usize = 1024;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    if let Err(e) = init_logging(cli.log_level) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

// Logs go to stderr; stdout only carries the status line.
fn init_logging(level: LevelFilter) -> Result<()> {
    let stderr: ConsoleAppender = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(JsonEncoder::new()))
        .build();
    let log_config = log4rs::config::Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))
        .map_err(|e| Error::Logging(e.to_string()))?;
    log4rs::init_config(log_config).map_err(|e| Error::Logging(e.to_string()))?;
    Ok(())
}

async fn run(cli: cli::Cli) -> Result<()> {
    match &cli.command {
        None => {
            let args = &cli.gen;
            let req = request::GenerationRequest::try_from(args)?;
            println!("{}, {}, {}", args.size, args.keys, args.data_dir.display());
            info!(
                "Generating {}GiB ({} rows) into {:?} (keys: {:?}, skew: {})",
                req.size_gb,
                req.rows(),
                req.output,
                req.keys,
                req.skew
            );
            tokio::task::spawn_blocking(move || generate::generate_data(&req)).await??;
            Ok(())
        }
        Some(cli::Commands::Check(args)) => {
            let expect = check::Expectations::try_from(args)?;
            let summary = check::check(&args.file, expect)?;
            println!("{} rows, {}B", summary.rows, summary.bytes);
            Ok(())
        }
    }
}
