pub mod routes;
pub mod store;
pub mod config;
pub mod cors;
pub mod error;
pub mod catchers;
pub use shared::{CountResponse, ErrorResponse};

use rocket::{Build, Rocket, catchers, routes};
use crate::{
    catchers::{internal_error, not_found},
    cors::CORS,
    routes::{all_options, get_count, AppState},
};

/// Counter API mounted under `/api`, without the static site.
pub fn build_rocket(state: AppState, cors: CORS) -> Rocket<Build> {
    rocket::build()
        .attach(cors)
        .manage(state)
        .mount("/api", routes![get_count, all_options])
        .register("/", catchers![not_found, internal_error])
}

#[cfg(test)]
mod tests;
