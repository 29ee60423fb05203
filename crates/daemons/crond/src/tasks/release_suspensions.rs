use std::time::Duration;

use amoret_database::{Database, Notifier};
use amoret_result::Result;
use iso8601_timestamp::Timestamp;
use log::{info, warn};
use tokio::time::sleep;

/// Reinstate accounts whose suspension has lapsed
///
/// Each account is handled independently so one failure never stalls
/// the rest of the sweep.
pub async fn task(db: Database, notifier: Notifier) -> Result<()> {
    let interval = amoret_config::config()
        .await
        .features
        .moderation
        .sweep_interval_seconds;

    loop {
        match db
            .fetch_accounts_with_lapsed_suspension(Timestamp::now_utc())
            .await
        {
            Ok(accounts) => {
                for mut account in accounts {
                    info!("Reinstating account {} after suspension lapsed", account.id);

                    if let Err(err) = account.reinstate(&db, &notifier).await {
                        warn!("Failed to reinstate account {}: {:?}", account.id, &err);
                    }
                }
            }
            Err(err) => {
                warn!("Failed to fetch lapsed suspensions: {:?}", &err);
            }
        }

        sleep(Duration::from_secs(interval)).await;
    }
}
