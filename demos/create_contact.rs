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
    let phone = std::env::var("TEXTMAGIC_PHONE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "TEXTMAGIC_PHONE environment variable is required",
        )
    })?;

    let client = TextMagicClient::new(Credentials::new(username, api_key)?);

    let list = client
        .create_list(&Params::with("name", "textmagic demo")?.and("shared", false)?)
        .await?;
    let contact = client
        .create_contact(
            &Params::with("phone", phone)?
                .and("firstName", "Demo")?
                .and("lists", &[list.id][..])?,
        )
        .await?;

    let fetched = client.get_contact(contact.id).await?;
    println!(
        "contact {} ({:?} {:?}) in list {}",
        fetched.id, fetched.first_name, fetched.phone, list.id
    );

    client.delete_contact(contact.id).await?;
    client.delete_list(list.id).await?;
    println!("cleaned up");

    Ok(())
}
