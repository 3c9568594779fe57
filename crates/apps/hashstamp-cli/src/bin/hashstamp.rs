use clap::Parser;
use hashstamp_cli::cli::app::{run_cli, Cli, Outcome};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match run_cli(cli) {
        Ok(Outcome::Success) => ExitCode::SUCCESS,
        Ok(Outcome::Rejected) => ExitCode::from(2),
        Err(err) => {
            eprintln!("hashstamp: {err:#}");
            ExitCode::FAILURE
        }
    }
}
