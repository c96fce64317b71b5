use rocket::http::Status;
use rocket::response::Responder;
use rocket::serde::json::Json;
use shared::ErrorResponse;
use thiserror::Error;
use crate::store::StoreError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Counter unavailable")]
    Store(#[from] StoreError),
}

impl ApiError {
    pub fn status(&self) -> Status {
        match self {
            ApiError::Store(_) => Status::InternalServerError,
        }
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for ApiError {
    fn respond_to(self, req: &'r rocket::Request<'_>) -> rocket::response::Result<'o> {
        let status = self.status();
        match &self {
            ApiError::Store(e) => tracing::error!("Store failure on {}: {}", req.uri(), e),
        }

        let body = Json(ErrorResponse {
            error: self.to_string(),
            status: status.code,
        });

        rocket::Response::build_from(body.respond_to(req)?)
            .status(status)
            .ok()
    }
}
