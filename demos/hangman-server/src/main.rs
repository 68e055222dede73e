use hangman::prelude::*;
use tracing_subscriber::EnvFilter;

// ---------------------------------------------------------------------------
// Server bootstrap
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is fine; the variables may come from the shell.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let server = HangmanServerBuilder::from_config(config).build().await?;

    tracing::info!(addr = %server.local_addr()?, "starting hangman server");
    server.run().await?;
    Ok(())
}
