use std::io;

use textmagic::{Credentials, Params, TextMagicClient};
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

    let user = client.get_user().await?;
    println!(
        "user: {} ({}), balance: {}, currency: {:?}",
        user.username,
        user.id,
        user.balance,
        user.currency.map(|currency| currency.id)
    );

    let stats = client
        .get_messaging_stat(Some(&Params::with("by", "month")?))
        .await?;
    for stat in stats {
        println!(
            "{}: delivered {}, failed {}, received {}, costs {}",
            stat.date,
            stat.messages_sent_delivered,
            stat.messages_sent_failed,
            stat.messages_received,
            stat.costs
        );
    }

    let numbers = client.get_number_list(None).await?;
    println!("dedicated numbers: {}", numbers.resources.len());

    Ok(())
}
