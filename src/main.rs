use std::process::ExitCode;
use unity_reporter::cli;

#[tokio::main]
async fn main() -> ExitCode {
    // Parse the command line and run the selected command.
    match cli::run().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
