use amoret_result::Result;

use crate::AdminUser;

#[cfg(feature = "mongodb")]
mod mongodb;
mod reference;

#[async_trait]
pub trait AbstractAdminUsers: Sync + Send {
    async fn admin_user_insert(&self, user: AdminUser) -> Result<()>;

    async fn admin_user_fetch(&self, user_id: &str) -> Result<AdminUser>;

    async fn admin_user_fetch_email(&self, email: &str) -> Result<AdminUser>;
}
