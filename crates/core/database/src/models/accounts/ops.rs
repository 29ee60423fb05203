use amoret_result::Result;
use iso8601_timestamp::Timestamp;

use crate::{Account, PartialAccount};

#[cfg(feature = "mongodb")]
mod mongodb;
mod reference;

#[async_trait]
pub trait AbstractAccounts: Sync + Send {
    /// Insert a new account into the database
    async fn insert_account(&self, account: &Account) -> Result<()>;

    /// Fetch an account from the database
    async fn fetch_account(&self, id: &str) -> Result<Account>;

    /// Update an account with new information
    async fn update_account(&self, id: &str, partial: &PartialAccount) -> Result<()>;

    /// Fetch all accounts waiting for initial review
    async fn fetch_accounts_in_review(&self) -> Result<Vec<Account>>;

    /// Fetch suspended accounts whose suspension has lapsed
    async fn fetch_accounts_with_lapsed_suspension(
        &self,
        as_of: Timestamp,
    ) -> Result<Vec<Account>>;
}
