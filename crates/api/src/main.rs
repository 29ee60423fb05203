#[macro_use]
extern crate rocket;
#[macro_use]
extern crate rocket_okapi;
#[macro_use]
extern crate serde_json;
#[macro_use]
extern crate amoret_result;

pub mod routes;

use amoret_database::{AmqpNotifier, DatabaseInfo, Notifier};
use log::{info, warn};
use rocket_cors::AllowedOrigins;
use std::str::FromStr;

#[launch]
async fn rocket() -> _ {
    setup_logging();

    info!(
        "Starting Amoret moderation server [version {}].",
        env!("CARGO_PKG_VERSION")
    );

    amoret_config::init().await;

    let cors = rocket_cors::CorsOptions {
        allowed_origins: AllowedOrigins::All,
        allowed_methods: [
            "Get", "Put", "Post", "Delete", "Options", "Head", "Trace", "Connect", "Patch",
        ]
        .iter()
        .map(|s| FromStr::from_str(s).unwrap())
        .collect(),
        ..Default::default()
    }
    .to_cors()
    .expect("Failed to create CORS.");

    // Setup database
    let db = DatabaseInfo::Auto.connect().await.expect("database");

    // Setup notification dispatcher
    let notifier = match AmqpNotifier::connect().await {
        Ok(amqp) => Notifier::Amqp(amqp),
        Err(err) => {
            warn!("Notification broker unreachable, dropping notifications: {err:?}");
            Notifier::Reference(Default::default())
        }
    };

    // Configure Rocket
    let rocket = rocket::build();
    routes::mount(rocket)
        .mount("/", rocket_cors::catch_all_options_routes())
        .mount(
            "/swagger/",
            rocket_okapi::swagger_ui::make_swagger_ui(&rocket_okapi::swagger_ui::SwaggerUIConfig {
                url: "../openapi.json".to_owned(),
                ..Default::default()
            }),
        )
        .manage(db)
        .manage(notifier)
        .manage(cors.clone())
        .attach(cors)
}

fn setup_logging() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }

    if std::env::var("ROCKET_ADDRESS").is_err() {
        std::env::set_var("ROCKET_ADDRESS", "0.0.0.0");
    }

    pretty_env_logger::init();
}
