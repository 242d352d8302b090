use std::process::ExitCode;

fn main() -> ExitCode {
    match sales_dash::app::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Failure messages go to stdout: the missing-file hint is part of
            // the program's plain output contract, not diagnostic noise.
            println!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}
