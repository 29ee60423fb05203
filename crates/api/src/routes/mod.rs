use okapi::openapi3::OpenApi;
use rocket_okapi::settings::OpenApiSettings;
pub use rocket::http::Status;
use rocket::{Build, Rocket};

mod admin;
mod appeals;
mod profiles;
mod queue;
mod reports;
mod root;
mod users;

pub fn mount(mut rocket: Rocket<Build>) -> Rocket<Build> {
    let settings = OpenApiSettings::default();

    mount_endpoints_and_merged_docs! {
        rocket, "/".to_owned(), settings,
        "/" => (vec![], custom_openapi_spec()),
        "" => openapi_get_routes_spec![root::root],
        "/profiles" => profiles::routes(),
        "/users" => users::routes(),
        "/reports" => reports::routes(),
        "/queue" => queue::routes(),
        "/appeals" => appeals::routes(),
        "/admin" => admin::routes()
    };

    rocket
}

fn custom_openapi_spec() -> OpenApi {
    use okapi::openapi3::*;

    let mut extensions = schemars::Map::new();
    extensions.insert(
        "x-tagGroups".to_owned(),
        json!([
          {
            "name": "Profiles",
            "tags": [
              "Profile Review"
            ]
          },
          {
            "name": "Moderation",
            "tags": [
              "User Moderation",
              "Reports",
              "Moderation Queue",
              "Appeals"
            ]
          },
          {
            "name": "Administration",
            "tags": [
              "Admin"
            ]
          }
        ]),
    );

    OpenApi {
        openapi: "3.0.0".to_string(),
        info: Info {
            title: "Amoret Moderation API".to_string(),
            description: Some(
                "Account review lifecycle, report resolution, appeals and the suspicious-profile queue."
                    .to_string(),
            ),
            version: env!("CARGO_PKG_VERSION").to_string(),
            extensions,
            ..Default::default()
        },
        ..Default::default()
    }
}
