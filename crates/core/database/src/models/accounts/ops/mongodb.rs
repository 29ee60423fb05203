use amoret_result::Result;
use iso8601_timestamp::Timestamp;

use crate::MongoDb;
use crate::{Account, PartialAccount};

use super::AbstractAccounts;

static COL: &str = "accounts";

#[async_trait]
impl AbstractAccounts for MongoDb {
    /// Insert a new account into the database
    async fn insert_account(&self, account: &Account) -> Result<()> {
        query!(self, insert_one, COL, &account).map(|_| ())
    }

    /// Fetch an account from the database
    async fn fetch_account(&self, id: &str) -> Result<Account> {
        query!(self, find_one_by_id, COL, id)?.ok_or_else(|| create_error!(NotFound))
    }

    /// Update an account with new information
    async fn update_account(&self, id: &str, partial: &PartialAccount) -> Result<()> {
        query!(self, update_one_by_id, COL, id, partial).map(|_| ())
    }

    /// Fetch all accounts waiting for initial review
    async fn fetch_accounts_in_review(&self) -> Result<Vec<Account>> {
        query!(
            self,
            find,
            COL,
            doc! {
                "profile_status.status": "pending"
            }
        )
    }

    /// Fetch suspended accounts whose suspension has lapsed
    async fn fetch_accounts_with_lapsed_suspension(
        &self,
        as_of: Timestamp,
    ) -> Result<Vec<Account>> {
        let as_of = bson::to_bson(&as_of).map_err(|_| create_database_error!("to_bson", COL))?;

        query!(
            self,
            find,
            COL,
            doc! {
                "profile_status.status": "suspended",
                "moderation_flags.suspended_until": {
                    "$lte": as_of
                }
            }
        )
    }
}
