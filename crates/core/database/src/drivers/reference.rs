use std::{collections::HashMap, sync::Arc};

use futures::lock::Mutex;

use crate::{Account, AdminToken, AdminUser, Appeal, ModerationQueueEntry, Report};

database_derived!(
    /// Reference implementation
    #[derive(Default)]
    pub struct ReferenceDb {
        pub accounts: Arc<Mutex<HashMap<String, Account>>>,
        pub reports: Arc<Mutex<HashMap<String, Report>>>,
        pub appeals: Arc<Mutex<HashMap<String, Appeal>>>,
        pub moderation_queue: Arc<Mutex<HashMap<String, ModerationQueueEntry>>>,

        pub admin_users: Arc<Mutex<HashMap<String, AdminUser>>>,
        pub admin_tokens: Arc<Mutex<HashMap<String, AdminToken>>>,
    }
);
