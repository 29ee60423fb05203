mod accounts;
mod appeals;
mod moderation_queue;
mod notifications;
mod reports;
mod stats;

pub use accounts::*;
pub use appeals::*;
pub use moderation_queue::*;
pub use notifications::*;
pub use reports::*;
pub use stats::*;
