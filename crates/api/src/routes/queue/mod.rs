use rocket::Route;
use okapi::openapi3::OpenApi;

mod dismiss_entry;
mod enqueue_suspect;
mod fetch_queue;

pub fn routes() -> (Vec<Route>, OpenApi) {
    openapi_get_routes_spec![
        enqueue_suspect::enqueue_suspect,
        fetch_queue::fetch_queue,
        dismiss_entry::dismiss_entry,
    ]
}
