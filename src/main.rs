use anyhow::Result;
use species_chat::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
