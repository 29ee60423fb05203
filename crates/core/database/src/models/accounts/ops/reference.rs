use amoret_models::v0::ProfileStatus;
use amoret_result::Result;
use iso8601_timestamp::Timestamp;

use crate::ReferenceDb;
use crate::{Account, PartialAccount};

use super::AbstractAccounts;

#[async_trait]
impl AbstractAccounts for ReferenceDb {
    /// Insert a new account into the database
    async fn insert_account(&self, account: &Account) -> Result<()> {
        let mut accounts = self.accounts.lock().await;
        if accounts.contains_key(&account.id) {
            Err(create_database_error!("insert", "account"))
        } else {
            accounts.insert(account.id.to_string(), account.clone());
            Ok(())
        }
    }

    /// Fetch an account from the database
    async fn fetch_account(&self, id: &str) -> Result<Account> {
        let accounts = self.accounts.lock().await;
        accounts
            .get(id)
            .cloned()
            .ok_or_else(|| create_error!(NotFound))
    }

    /// Update an account with new information
    async fn update_account(&self, id: &str, partial: &PartialAccount) -> Result<()> {
        let mut accounts = self.accounts.lock().await;
        if let Some(account) = accounts.get_mut(id) {
            account.apply_options(partial.clone());
            Ok(())
        } else {
            Err(create_error!(NotFound))
        }
    }

    /// Fetch all accounts waiting for initial review
    async fn fetch_accounts_in_review(&self) -> Result<Vec<Account>> {
        let accounts = self.accounts.lock().await;
        Ok(accounts
            .values()
            .filter(|account| matches!(account.profile_status, ProfileStatus::Pending {}))
            .cloned()
            .collect())
    }

    /// Fetch suspended accounts whose suspension has lapsed
    async fn fetch_accounts_with_lapsed_suspension(
        &self,
        as_of: Timestamp,
    ) -> Result<Vec<Account>> {
        let accounts = self.accounts.lock().await;
        Ok(accounts
            .values()
            .filter(
                |account| matches!(&account.profile_status, ProfileStatus::Suspended { until, .. } if *until <= as_of),
            )
            .cloned()
            .collect())
    }
}
