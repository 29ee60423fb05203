mod accounts;
mod admin_tokens;
mod admin_users;
mod appeals;
mod moderation_queue;
mod reports;
mod stats;

pub use accounts::*;
pub use admin_tokens::*;
pub use admin_users::*;
pub use appeals::*;
pub use moderation_queue::*;
pub use reports::*;
pub use stats::*;

#[cfg(feature = "mongodb")]
use crate::MongoDb;
use crate::{Database, ReferenceDb};

pub trait AbstractDatabase:
    Sync
    + Send
    + accounts::AbstractAccounts
    + admin_tokens::AbstractAdminTokens
    + admin_users::AbstractAdminUsers
    + appeals::AbstractAppeals
    + moderation_queue::AbstractModerationQueue
    + reports::AbstractReports
    + stats::AbstractStats
{
}

impl AbstractDatabase for ReferenceDb {}
#[cfg(feature = "mongodb")]
impl AbstractDatabase for MongoDb {}

impl std::ops::Deref for Database {
    type Target = dyn AbstractDatabase;

    fn deref(&self) -> &Self::Target {
        match &self {
            Database::Reference(dummy) => dummy,
            #[cfg(feature = "mongodb")]
            Database::MongoDb(mongo) => mongo,
        }
    }
}
