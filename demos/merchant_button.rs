//! Example: Creating a payment button and listing orders.
//!
//! Run with: cargo run --example merchant_button

use coinbase_api_client::CoinbaseClient;
use coinbase_api_client::rest::merchant::{ButtonKind, ButtonParams};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();

    let client = match CoinbaseClient::from_env() {
        Ok(client) => client,
        Err(_) => {
            println!("Set COINBASE_API_KEY and COINBASE_API_SECRET to run this example.");
            return Ok(());
        }
    };

    let params = ButtonParams {
        kind: Some(ButtonKind::Donation),
        description: Some("Support the project".into()),
        ..ButtonParams::new("Donation", "5.00", "USD")
    };
    let button = client.create_button(&params).await?;
    println!("Button {}:\n{}", button.code, button.embed_html());

    let orders = client.get_orders(1).await?;
    for order in &orders.orders {
        println!("{} {:?}", order.id, order.status);
    }

    Ok(())
}
