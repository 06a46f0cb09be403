use std::process::ExitCode;

fn main() -> ExitCode {
    match maintenance_advisor_lib::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", maintenance_advisor_lib::error_message(&e));
            ExitCode::FAILURE
        }
    }
}
