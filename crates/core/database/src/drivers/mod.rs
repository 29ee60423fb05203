#[cfg(feature = "mongodb")]
mod mongodb;
mod reference;

use rand::Rng;

#[cfg(feature = "mongodb")]
pub use self::mongodb::*;
pub use self::reference::*;

/// Database information to use to create a client
pub enum DatabaseInfo {
    /// Auto-detect the database in use
    Auto,
    /// Auto-detect the database in use and create an empty testing database
    Test(String),
    /// Use the mock database
    Reference,
    /// Connect to MongoDB
    #[cfg(feature = "mongodb")]
    MongoDb { uri: String, database_name: String },
    /// Use existing MongoDB connection
    #[cfg(feature = "mongodb")]
    MongoDbFromClient(::mongodb::Client, String),
}

/// Database
#[derive(Clone)]
pub enum Database {
    /// Mock database
    Reference(ReferenceDb),
    /// MongoDB database
    #[cfg(feature = "mongodb")]
    MongoDb(MongoDb),
}

impl DatabaseInfo {
    /// Create a database client from the given database information
    pub async fn connect(self) -> Result<Database, String> {
        let config = amoret_config::config().await;

        match self {
            DatabaseInfo::Auto => {
                if std::env::var("TEST_DB").is_ok() {
                    Self::connect_test(format!(
                        "amoret_test_{}",
                        rand::thread_rng().gen_range(1_000_000..10_000_000)
                    ))
                    .await
                } else if !config.database.mongodb.is_empty() {
                    #[cfg(feature = "mongodb")]
                    return Self::connect_mongodb(config.database.mongodb, "amoret".to_string())
                        .await;

                    #[cfg(not(feature = "mongodb"))]
                    return Err("MongoDB not enabled.".to_string());
                } else {
                    Ok(Database::Reference(Default::default()))
                }
            }
            DatabaseInfo::Test(database_name) => Self::connect_test(database_name).await,
            DatabaseInfo::Reference => Ok(Database::Reference(Default::default())),
            #[cfg(feature = "mongodb")]
            DatabaseInfo::MongoDb { uri, database_name } => {
                Self::connect_mongodb(uri, database_name).await
            }
            #[cfg(feature = "mongodb")]
            DatabaseInfo::MongoDbFromClient(client, database_name) => {
                Ok(Database::MongoDb(MongoDb(client, database_name)))
            }
        }
    }

    /// Connect to the test database selected by `TEST_DB`, the mock
    /// database when the variable is unset
    async fn connect_test(database_name: String) -> Result<Database, String> {
        match std::env::var("TEST_DB")
            .unwrap_or_else(|_| "REFERENCE".to_string())
            .as_str()
        {
            "MONGODB" => {
                #[cfg(feature = "mongodb")]
                return Self::connect_mongodb(
                    amoret_config::config().await.database.mongodb,
                    database_name,
                )
                .await;

                #[cfg(not(feature = "mongodb"))]
                return Err("MongoDB not enabled.".to_string());
            }
            _ => Ok(Database::Reference(Default::default())),
        }
    }

    #[cfg(feature = "mongodb")]
    async fn connect_mongodb(uri: String, database_name: String) -> Result<Database, String> {
        let client = ::mongodb::Client::with_uri_str(uri)
            .await
            .map_err(|_| "Failed to init db connection.".to_string())?;

        Ok(Database::MongoDb(MongoDb(client, database_name)))
    }
}

impl Database {
    /// Drop the database, for use by tests only
    pub async fn drop_database(&self) {
        match self {
            Database::Reference(_) => {}
            #[cfg(feature = "mongodb")]
            Database::MongoDb(mongo) => {
                mongo
                    .db()
                    .drop()
                    .await
                    .expect("Failed to drop the database.");
            }
        }
    }
}
