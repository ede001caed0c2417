use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    stimuli_loader_lib::run().await
}
