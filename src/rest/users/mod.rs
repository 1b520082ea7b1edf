//! Users and contacts.

mod types;

pub use types::*;

use crate::error::CoinbaseError;
use crate::rest::CoinbaseClient;
use crate::rest::endpoints::users;
use crate::rest::envelope::{Enveloped, require};

impl CoinbaseClient {
    /// Create a new Coinbase user.
    pub async fn create_user(&self, email: &str, password: &str) -> Result<User, CoinbaseError> {
        let request = CreateUserRequest {
            user: NewUser { email, password },
        };
        let holder: UserHolder = self.post(users::USERS, &request).await?;
        require(holder.into_checked("create_user")?.user, "user")
    }

    /// Get the user the client is authenticated as.
    pub async fn get_user(&self) -> Result<User, CoinbaseError> {
        let holder: UsersHolder = self.get(users::USERS, &()).await?;
        holder
            .into_checked("get_user")?
            .into_first()
            .ok_or_else(|| CoinbaseError::InvalidResponse("No user in response".to_string()))
    }

    /// List people the user has sent money to.
    pub async fn get_contacts(&self, params: &ContactsParams) -> Result<Contacts, CoinbaseError> {
        let holder: ContactsHolder = self.get(users::CONTACTS, params).await?;
        Ok(holder.into())
    }
}
