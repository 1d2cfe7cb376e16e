use std::io;

use textmagic::{Credentials, Params, PhoneNumber, TextMagicClient};
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
    let phone_raw = std::env::var("TEXTMAGIC_PHONE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "TEXTMAGIC_PHONE environment variable is required",
        )
    })?;
    let text = std::env::var("TEXTMAGIC_MESSAGE")
        .unwrap_or_else(|_| "Hello from the textmagic send_message demo.".to_owned());

    let client = TextMagicClient::new(Credentials::new(username, api_key)?);
    let phone = PhoneNumber::parse(None, phone_raw)?;
    let phones = phone.international_digits().to_owned();

    let price = client
        .get_message_price(&Params::with("text", text.as_str())?.and("phones", phones.as_str())?)
        .await?;
    println!("total: {}, parts: {}", price.total, price.parts);

    let sent = client
        .create_message(&Params::with("text", text)?.and("phones", phones)?)
        .await?;
    println!(
        "id: {}, type: {}, session: {}, message: {}",
        sent.id, sent.kind, sent.session_id, sent.message_id
    );

    Ok(())
}
