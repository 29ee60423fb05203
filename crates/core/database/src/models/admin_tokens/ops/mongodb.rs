use amoret_result::Result;
use iso8601_timestamp::Timestamp;

use crate::AdminToken;
use crate::MongoDb;

use super::AbstractAdminTokens;

static COL: &str = "admin_tokens";

#[async_trait]
impl AbstractAdminTokens for MongoDb {
    async fn admin_token_create(&self, token: AdminToken) -> Result<()> {
        query!(self, insert_one, COL, token).map(|_| ())
    }

    async fn admin_token_authenticate(&self, token: &str) -> Result<AdminToken> {
        query!(
            self,
            find_one,
            COL,
            doc! {
                "token": token
            }
        )?
        .filter(|token: &AdminToken| token.expiry > Timestamp::now_utc())
        .ok_or_else(|| create_error!(InvalidCredentials))
    }
}
