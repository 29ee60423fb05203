use rocket::Route;
use okapi::openapi3::OpenApi;

mod create_report;
mod fetch_report;
mod fetch_reports;
mod resolve_report;

pub fn routes() -> (Vec<Route>, OpenApi) {
    openapi_get_routes_spec![
        create_report::create_report,
        fetch_reports::fetch_reports,
        fetch_report::fetch_report,
        resolve_report::resolve_report,
    ]
}
