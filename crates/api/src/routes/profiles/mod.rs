use rocket::Route;
use okapi::openapi3::OpenApi;

mod approve_profile;
mod fetch_pending;
mod reject_profile;
mod resubmit_profile;

pub fn routes() -> (Vec<Route>, OpenApi) {
    openapi_get_routes_spec![
        fetch_pending::fetch_pending,
        approve_profile::approve_profile,
        reject_profile::reject_profile,
        resubmit_profile::resubmit_profile,
    ]
}
