use okapi::openapi3::{SecurityScheme, SecuritySchemeData};
use rocket_okapi::{
    gen::OpenApiGenerator,
    request::{OpenApiFromRequest, RequestHeaderInput},
};

use crate::AdminUser;

impl OpenApiFromRequest<'_> for AdminUser {
    fn from_request_input(
        _gen: &mut OpenApiGenerator,
        _name: String,
        _required: bool,
    ) -> rocket_okapi::Result<RequestHeaderInput> {
        let mut requirements = schemars::Map::new();
        requirements.insert("Admin Token".to_owned(), vec![]);

        Ok(RequestHeaderInput::Security(
            "Admin Token".to_owned(),
            SecurityScheme {
                data: SecuritySchemeData::ApiKey {
                    name: "x-admin-token".to_owned(),
                    location: "header".to_owned(),
                },
                description: Some("Used to authenticate as a member of the moderation team.".to_owned()),
                extensions: schemars::Map::new(),
            },
            requirements,
        ))
    }
}
