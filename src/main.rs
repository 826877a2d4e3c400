use clap::Parser;
use mls_comps::cli;
use std::process::ExitCode;
use tracing::error;

fn main() -> ExitCode {
    let args = cli::Args::parse();
    match cli::dispatch(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Config errors surface before the subscriber is installed.
            if tracing::dispatcher::has_been_set() {
                error!("{:#}", err);
            } else {
                eprintln!("mls-comps: {err:#}");
            }
            ExitCode::FAILURE
        }
    }
}
