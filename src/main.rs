use std::process::ExitCode;

use pluck::output as out;
use pluck::{app, cli};

fn main() -> ExitCode {
    let args = cli::parse();
    match app::run(args) {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => {
            out::print_error(&format!("{e:#}"));
            out::pause();
            ExitCode::FAILURE
        }
    }
}
