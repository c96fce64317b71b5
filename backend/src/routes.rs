use rocket::{State, get, http::{Header, Status}, serde::json::Json, Responder};
use tracing::{debug, instrument};
use shared::CountResponse;
use crate::{error::ApiError, store::CountStore};

pub struct AppState {
    pub store: Box<dyn CountStore>,
    pub site_id: String,
}

impl AppState {
    pub fn new(store: impl CountStore + 'static, site_id: impl Into<String>) -> Self {
        Self {
            store: Box::new(store),
            site_id: site_id.into(),
        }
    }
}

/// Count body that browsers and proxies must not cache.
#[derive(Responder)]
pub struct CountReply {
    inner: Json<CountResponse>,
    cache_control: Header<'static>,
}

impl CountReply {
    pub fn new(count: i64) -> Self {
        Self {
            inner: Json(CountResponse::new(count)),
            cache_control: Header::new("Cache-Control", "no-store"),
        }
    }
}

#[rocket::options("/<_..>")]
pub async fn all_options() -> Status {
    Status::Ok
}

#[instrument(skip(state), fields(site_id = %state.site_id))]
#[get("/count")]
pub async fn get_count(state: &State<AppState>) -> Result<CountReply, ApiError> {
    let count = state.store.increment(&state.site_id).await?;
    debug!(count, "Visitor counted");
    Ok(CountReply::new(count))
}
