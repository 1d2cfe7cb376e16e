use std::io;

use textmagic::{Credentials, TextMagicClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let username = std::env::var("TEXTMAGIC_USERNAME").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "TEXTMAGIC_USERNAME environment variable is required",
        )
    })?;
    let api_key = std::env::var("TEXTMAGIC_API_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "TEXTMAGIC_API_KEY environment variable is required",
        )
    })?;

    let client = TextMagicClient::new(Credentials::new(username, api_key)?);
    client.ping().await?;
    println!("credentials accepted");

    Ok(())
}
