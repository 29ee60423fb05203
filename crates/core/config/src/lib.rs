use cached::proc_macro::cached;
use config::{Config, File, FileFormat};
use futures_locks::RwLock;
use once_cell::sync::Lazy;
use serde::Deserialize;

static CONFIG_BUILDER: Lazy<RwLock<Config>> = Lazy::new(|| {
    RwLock::new({
        let mut builder = Config::builder().add_source(File::from_str(
            include_str!("../Amoret.toml"),
            FileFormat::Toml,
        ));

        if std::path::Path::new("Amoret.toml").exists() {
            builder = builder.add_source(File::new("Amoret.toml", FileFormat::Toml));
        }

        builder.build().unwrap()
    })
});

#[derive(Deserialize, Debug, Clone)]
pub struct Database {
    pub mongodb: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Hosts {
    pub app: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Rabbit {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Pushd {
    pub exchange: String,
    pub moderation_queue: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct FeaturesModeration {
    /// Length of a suspension when the moderator does not give one
    pub default_suspension_days: i64,
    /// Maximum number of entries returned when listing the moderation queue
    pub queue_page_size: i64,
    /// How often the suspension expiry sweep runs
    pub sweep_interval_seconds: u64,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Features {
    pub moderation: FeaturesModeration,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    pub database: Database,
    pub hosts: Hosts,
    pub rabbit: Rabbit,
    pub pushd: Pushd,
    pub features: Features,
}

pub async fn init() {
    println!(
        ":: Amoret Configuration ::\n\x1b[32m{:?}\x1b[0m",
        config().await
    );
}

pub async fn read() -> Config {
    CONFIG_BUILDER.read().await.clone()
}

#[cached(time = 30)]
pub async fn config() -> Settings {
    read().await.try_deserialize::<Settings>().unwrap()
}

#[cfg(feature = "test")]
#[cfg(test)]
mod tests {
    use crate::init;

    #[async_std::test]
    async fn it_works() {
        init().await;
    }
}
