mod app;

use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    // grep convention: 0 = something matched, 1 = nothing did, 2 = error.
    match app::run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("{:#}", err);
            ExitCode::from(2)
        }
    }
}
