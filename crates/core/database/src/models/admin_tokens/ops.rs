use amoret_result::Result;

use crate::AdminToken;

#[cfg(feature = "mongodb")]
mod mongodb;
mod reference;

#[async_trait]
pub trait AbstractAdminTokens: Sync + Send {
    async fn admin_token_create(&self, token: AdminToken) -> Result<()>;

    async fn admin_token_authenticate(&self, token: &str) -> Result<AdminToken>;
}
