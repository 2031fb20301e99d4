//! `studymark`
//!
//! Writes `logo.png` and `favicon.ico` into the working directory.

use std::process::ExitCode;

use studymark::{create_logo, OutputLocation};

fn main() -> ExitCode {
    env_logger::init();

    match create_logo(&OutputLocation::default()) {
        Ok(_) => {
            println!("Logo created successfully");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
