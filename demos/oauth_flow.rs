//! Example: OAuth authorization-code flow.
//!
//! Run with: cargo run --example oauth_flow -- <redirect-url>
//!
//! Run once without arguments to print the authorize URL, then again with the
//! URL Coinbase redirected the browser to.

use coinbase_api_client::CoinbaseClient;
use coinbase_api_client::oauth::OAuthServiceBuilder;

const REDIRECT_URI: &str = "https://localhost:3000/tokens";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();
    let _ = dotenv::dotenv();

    let builder = match OAuthServiceBuilder::from_env(REDIRECT_URI) {
        Ok(builder) => builder,
        Err(_) => {
            println!("Set COINBASE_CLIENT_ID and COINBASE_CLIENT_SECRET to run this example.");
            return Ok(());
        }
    };
    let ca_bundle = match std::env::var("COINBASE_CA_BUNDLE") {
        Ok(path) => path,
        Err(_) => {
            println!("Set COINBASE_CA_BUNDLE to the PEM file trusted for coinbase.com.");
            return Ok(());
        }
    };
    let oauth = builder.ca_bundle(ca_bundle).build()?;

    let Some(redirect) = std::env::args().nth(1) else {
        println!("Visit: {}", oauth.create_authorize_url(&["user", "balance"])?);
        return Ok(());
    };

    let tokens = oauth.new_tokens_from_redirect(&redirect).await?;
    println!("Access token expires at {}", tokens.expires_at());

    let client = CoinbaseClient::builder().oauth_tokens(tokens.clone()).build()?;
    let user = client.get_user().await?;
    println!("Authorized as {:?}", user.email);

    let refreshed = oauth.refresh_tokens(&tokens).await?;
    println!("Refreshed; new expiry {}", refreshed.expires_at());

    Ok(())
}
