//! Binary entrypoint for the `recid` CLI.

use std::process::ExitCode;

use recid::Error;

fn main() -> ExitCode {
    // Settings may come from RECID_* variables in a .env file in the working
    // directory. Parent directories are not searched.
    let dotenv = dotenvy::from_path(".env");
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    if let Err(err) = dotenv {
        if !err.not_found() {
            log::warn!("ignoring unreadable .env file: {err}");
        }
    }

    match recid::run(std::env::args_os()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::Usage(msg)) => {
            eprint!("{msg}");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
