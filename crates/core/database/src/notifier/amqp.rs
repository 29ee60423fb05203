use amqprs::channel::{BasicPublishArguments, Channel};
use amqprs::connection::{Connection, OpenConnectionArguments};
use amqprs::BasicProperties;

use amoret_models::v0::ModerationNotification;
use amoret_result::Result;
use serde_json::to_string;

use super::AbstractNotifier;

/// RabbitMQ-backed dispatcher, one JSON payload per notification
#[derive(Clone)]
pub struct AmqpNotifier {
    #[allow(unused)]
    connection: Connection,
    channel: Channel,
}

impl AmqpNotifier {
    pub fn new(connection: Connection, channel: Channel) -> AmqpNotifier {
        AmqpNotifier {
            connection,
            channel,
        }
    }

    /// Open a connection and channel to the configured broker
    pub async fn connect() -> std::result::Result<AmqpNotifier, amqprs::error::Error> {
        let config = amoret_config::config().await;

        let connection = Connection::open(&OpenConnectionArguments::new(
            &config.rabbit.host,
            config.rabbit.port,
            &config.rabbit.username,
            &config.rabbit.password,
        ))
        .await?;

        let channel = connection.open_channel(None).await?;

        Ok(AmqpNotifier::new(connection, channel))
    }
}

#[async_trait]
impl AbstractNotifier for AmqpNotifier {
    /// Dispatch a single moderation notification
    async fn dispatch(&self, notification: ModerationNotification) -> Result<()> {
        let config = amoret_config::config().await;

        info!(
            "Dispatching {:?} notification to user {}",
            notification.kind, notification.user_id
        );

        let payload =
            to_string(&notification).map_err(|_| create_error!(InternalError))?;

        self.channel
            .basic_publish(
                BasicProperties::default()
                    .with_content_type("application/json")
                    .with_persistence(true)
                    .finish(),
                payload.into(),
                BasicPublishArguments::new(
                    &config.pushd.exchange,
                    &config.pushd.moderation_queue,
                ),
            )
            .await
            .map_err(|_| create_error!(NotificationFailed))
    }
}
