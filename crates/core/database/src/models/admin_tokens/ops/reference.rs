use amoret_result::Result;
use iso8601_timestamp::Timestamp;

use crate::AdminToken;
use crate::ReferenceDb;

use super::AbstractAdminTokens;

#[async_trait]
impl AbstractAdminTokens for ReferenceDb {
    async fn admin_token_create(&self, token: AdminToken) -> Result<()> {
        let mut admin_tokens = self.admin_tokens.lock().await;
        if admin_tokens.contains_key(&token.id) {
            Err(create_database_error!("insert", "admin_tokens"))
        } else {
            admin_tokens.insert(token.id.to_string(), token);
            Ok(())
        }
    }

    async fn admin_token_authenticate(&self, token: &str) -> Result<AdminToken> {
        let admin_tokens = self.admin_tokens.lock().await;
        admin_tokens
            .values()
            .find(|entry| entry.token == token && entry.expiry > Timestamp::now_utc())
            .cloned()
            .ok_or_else(|| create_error!(InvalidCredentials))
    }
}
