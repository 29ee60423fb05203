use amoret_result::Result;

use crate::AdminUser;
use crate::ReferenceDb;

use super::AbstractAdminUsers;

#[async_trait]
impl AbstractAdminUsers for ReferenceDb {
    async fn admin_user_insert(&self, user: AdminUser) -> Result<()> {
        let mut admin_users = self.admin_users.lock().await;
        if admin_users.contains_key(&user.id) {
            Err(create_database_error!("insert", "admin_users"))
        } else {
            admin_users.insert(user.id.to_string(), user);
            Ok(())
        }
    }

    async fn admin_user_fetch(&self, user_id: &str) -> Result<AdminUser> {
        let admin_users = self.admin_users.lock().await;
        admin_users
            .get(user_id)
            .cloned()
            .ok_or_else(|| create_error!(NotFound))
    }

    async fn admin_user_fetch_email(&self, email: &str) -> Result<AdminUser> {
        let admin_users = self.admin_users.lock().await;
        admin_users
            .values()
            .find(|user| user.email == email)
            .cloned()
            .ok_or_else(|| create_error!(NotFound))
    }
}
