use rocket::serde::json::Json;
use schemars::JsonSchema;
use serde::Serialize;

/// Server information
#[derive(Serialize, JsonSchema, Debug)]
pub struct ServerInfo {
    /// Service name
    name: String,
    /// Service version
    version: String,
}

/// # Query Node
///
/// Fetch the server's name and version.
#[openapi(tag = "Core")]
#[get("/")]
pub async fn root() -> Json<ServerInfo> {
    Json(ServerInfo {
        name: "amoret-api".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
