use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    barkeep_cli::run().await
}
