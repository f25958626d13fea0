use std::process::ExitCode;

mod config;
mod library;
mod runtime;
mod server;
mod tags;

fn main() -> ExitCode {
    match runtime::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("cadenza: {err}");
            ExitCode::FAILURE
        }
    }
}
