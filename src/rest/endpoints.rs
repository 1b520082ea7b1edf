//! Coinbase REST API endpoint constants.

/// Base URL for the production API.
pub const COINBASE_BASE_URL: &str = "https://api.coinbase.com/v1/";
/// Base URL for the sandbox API.
pub const COINBASE_SANDBOX_URL: &str = "https://api.sandbox.coinbase.com/v1/";
/// Base URL for the pro API.
pub const COINBASE_PRO_URL: &str = "https://api.pro.coinbase.com/v1/";
/// Base URL for the pro sandbox API.
pub const COINBASE_PRO_SANDBOX_URL: &str = "https://api.pro.sandbox.coinbase.com/v1/";

/// Deployment a client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Live API.
    #[default]
    Production,
    /// Test API with fake funds.
    Sandbox,
    /// Pro deployment.
    Pro,
    /// Pro test deployment.
    ProSandbox,
}

impl Environment {
    /// Base URL endpoint paths are appended to.
    pub fn base_url(self) -> &'static str {
        match self {
            Environment::Production => COINBASE_BASE_URL,
            Environment::Sandbox => COINBASE_SANDBOX_URL,
            Environment::Pro => COINBASE_PRO_URL,
            Environment::ProSandbox => COINBASE_PRO_SANDBOX_URL,
        }
    }
}

/// Account endpoints.
pub mod account {
    /// Get account balance.
    pub const BALANCE: &str = "account/balance";
    /// Get the current receive address.
    pub const RECEIVE_ADDRESS: &str = "account/receive_address";
    /// Generate a new receive address.
    pub const GENERATE_RECEIVE_ADDRESS: &str = "account/generate_receive_address";
    /// List receive addresses.
    pub const ADDRESSES: &str = "addresses";
}

/// Transaction endpoints.
pub mod transactions {
    /// List transactions.
    pub const TRANSACTIONS: &str = "transactions";
    /// Send money.
    pub const SEND_MONEY: &str = "transactions/send_money";
    /// Request money.
    pub const REQUEST_MONEY: &str = "transactions/request_money";

    /// Single transaction.
    pub fn transaction(id: &str) -> String {
        format!("transactions/{id}")
    }

    /// Resend a money request.
    pub fn resend_request(id: &str) -> String {
        format!("transactions/{id}/resend_request")
    }

    /// Cancel a money request.
    pub fn cancel_request(id: &str) -> String {
        format!("transactions/{id}/cancel_request")
    }

    /// Complete a money request.
    pub fn complete_request(id: &str) -> String {
        format!("transactions/{id}/complete_request")
    }
}

/// Buy/sell endpoints.
pub mod transfers {
    /// Buy bitcoin.
    pub const BUYS: &str = "buys";
    /// Sell bitcoin.
    pub const SELLS: &str = "sells";
    /// List transfers.
    pub const TRANSFERS: &str = "transfers";
}

/// Merchant endpoints.
pub mod merchant {
    /// Create a payment button.
    pub const BUTTONS: &str = "buttons";
    /// Create or list orders.
    pub const ORDERS: &str = "orders";

    /// Create an order from an existing button.
    pub fn create_order_from_button(code: &str) -> String {
        format!("buttons/{code}/create_order")
    }

    /// Single order.
    pub fn order(id: &str) -> String {
        format!("orders/{id}")
    }
}

/// Price and currency endpoints.
pub mod market {
    /// Buy price quote.
    pub const BUY_PRICE: &str = "prices/buy";
    /// Sell price quote.
    pub const SELL_PRICE: &str = "prices/sell";
    /// Spot price.
    pub const SPOT_RATE: &str = "prices/spot_rate";
    /// Supported currencies.
    pub const CURRENCIES: &str = "currencies";
    /// Exchange rates between all currencies.
    pub const EXCHANGE_RATES: &str = "currencies/exchange_rates";
}

/// User endpoints.
pub mod users {
    /// Create or fetch users.
    pub const USERS: &str = "users";
    /// List contacts.
    pub const CONTACTS: &str = "contacts";
}

/// OAuth endpoints.
pub mod oauth {
    /// Base URL for the OAuth service.
    pub const OAUTH_BASE_URL: &str = "https://coinbase.com/";
    /// Page users are redirected to for authorization.
    pub const AUTHORIZE_URL: &str = "https://coinbase.com/oauth/authorize";
    /// Token exchange.
    pub const TOKEN: &str = "oauth/token";
}
