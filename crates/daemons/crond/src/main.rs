use amoret_database::{AmqpNotifier, DatabaseInfo, Notifier};
use amoret_result::Result;
use log::warn;
use tasks::release_suspensions;

pub mod tasks;

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }

    pretty_env_logger::init();
    amoret_config::init().await;

    let db = DatabaseInfo::Auto.connect().await.expect("database");

    let notifier = match AmqpNotifier::connect().await {
        Ok(amqp) => Notifier::Amqp(amqp),
        Err(err) => {
            warn!("Notification broker unreachable, dropping notifications: {err:?}");
            Notifier::Reference(Default::default())
        }
    };

    release_suspensions::task(db, notifier).await
}
