//! weektracker main entrypoint.

use std::process::ExitCode;
use weektracker::run;
use weektracker::ui::messages::error;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            error(e);
            ExitCode::FAILURE
        }
    }
}
