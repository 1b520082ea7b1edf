//! Example: Wallet balance, addresses and recent transactions.
//!
//! Run with: cargo run --example account_overview

use coinbase_api_client::CoinbaseClient;
use coinbase_api_client::auth::Credentials;
use coinbase_api_client::rest::account::AddressesParams;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();
    let _ = dotenv::dotenv();

    let credentials = match Credentials::try_from_env() {
        Some(creds) => creds,
        None => {
            println!("Set COINBASE_API_KEY and COINBASE_API_SECRET to run this example.");
            return Ok(());
        }
    };

    let client = CoinbaseClient::builder()
        .credentials(credentials)
        .user_agent("coinbase-api-client-examples/account_overview")
        .build()?;

    println!("=== Balance ===");
    let balance = client.get_balance().await?;
    println!("{} {}", balance.amount, balance.currency);

    println!("\n=== Receive Address ===");
    println!("{}", client.get_receive_address().await?);

    println!("\n=== Addresses ===");
    let addresses = client.get_all_addresses(&AddressesParams::default()).await?;
    for address in &addresses.addresses {
        println!("{} {:?}", address.address, address.label);
    }

    println!("\n=== Transactions ===");
    let page = client.get_transactions(1).await?;
    println!(
        "Page {} of {}",
        page.pagination.current_page, page.pagination.num_pages
    );
    for transaction in &page.transactions {
        println!("{} {:?}", transaction.id, transaction.status);
    }

    Ok(())
}
