use rocket::{Request, catch, serde::json::Json};
use shared::ErrorResponse;

#[catch(404)]
pub fn not_found(_req: &Request) -> Json<ErrorResponse> {
    Json(ErrorResponse {
        error: "The requested resource was not found.".into(),
        status: 404
    })
}

#[catch(500)]
pub fn internal_error(_req: &Request) -> Json<ErrorResponse> {
    Json(ErrorResponse {
        error: "An internal server error occurred.".into(),
        status: 500
    })
}
