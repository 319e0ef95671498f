use pomo::commands::Cli;
use pomo::libs::logging::init_logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    Cli::menu().await
}
