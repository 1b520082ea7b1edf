//! Example: Prices, currencies and exchange rates.
//!
//! Run with: cargo run --example market_data

use coinbase_api_client::CoinbaseClient;
use rust_decimal::Decimal;

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

    let buy = client.get_buy_price(Decimal::ONE).await?;
    println!(
        "Buy 1 BTC: {} {} (fees {})",
        buy.total.amount,
        buy.total.currency,
        buy.total_fees()
    );

    let sell = client.get_sell_price(Decimal::ONE).await?;
    println!("Sell 1 BTC: {} {}", sell.total.amount, sell.total.currency);

    let spot = client.get_spot_price("USD").await?;
    println!("Spot: {} {}", spot.amount, spot.currency);

    let currencies = client.get_currencies().await?;
    println!("Supported currencies: {}", currencies.len());

    let rate = client.get_exchange_rate("btc", "usd").await?;
    println!("btc_to_usd: {rate}");

    Ok(())
}
