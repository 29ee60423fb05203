use rocket::Route;
use okapi::openapi3::OpenApi;

mod dashboard;
mod stats;

pub fn routes() -> (Vec<Route>, OpenApi) {
    openapi_get_routes_spec![dashboard::dashboard, stats::stats,]
}
