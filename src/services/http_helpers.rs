use actix_web::{http::StatusCode, HttpResponse};

use crate::models::dto::response::ApiResponse;

/// Creates a `{ "success": true, "data": ... }` response
pub fn success_json<T: serde::Serialize>(data: T) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::ok(data))
}

/// Creates a `{ "success": false, "error": ... }` response with the given status
pub fn failure_json(status: StatusCode, message: impl std::fmt::Display) -> HttpResponse {
    HttpResponse::build(status).json(ApiResponse::failure(message.to_string()))
}

/// Creates a bad request error response
pub fn bad_request(message: impl std::fmt::Display) -> HttpResponse {
    failure_json(StatusCode::BAD_REQUEST, message)
}
