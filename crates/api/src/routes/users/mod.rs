use rocket::Route;
use okapi::openapi3::OpenApi;

mod ban_user;
mod suspend_user;
mod warn_user;

pub fn routes() -> (Vec<Route>, OpenApi) {
    openapi_get_routes_spec![
        warn_user::warn_user,
        suspend_user::suspend_user,
        ban_user::ban_user,
    ]
}
