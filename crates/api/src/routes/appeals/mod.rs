use rocket::Route;
use okapi::openapi3::OpenApi;

mod fetch_appeals;
mod submit_appeal;

pub fn routes() -> (Vec<Route>, OpenApi) {
    openapi_get_routes_spec![submit_appeal::submit_appeal, fetch_appeals::fetch_appeals,]
}
