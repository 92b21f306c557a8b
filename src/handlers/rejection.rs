// Turns every rejection into a JSON error body with a matching status

use std::convert::Infallible;

use tracing::error;
use warp::http::header::{HeaderValue, RETRY_AFTER};
use warp::http::StatusCode;
use warp::reply::Response;
use warp::{Rejection, Reply};

use crate::error::ComfortError;
use crate::models::ErrorResponse;

pub async fn handle_rejection(err: Rejection) -> Result<Response, Infallible> {
    Ok(rejection_response(&err))
}

fn rejection_response(err: &Rejection) -> Response {
    if let Some(e) = err.find::<ComfortError>() {
        let mut response = error_reply(e.status_code(), e.public_message());
        if let Some(delay) = e.retry_after() {
            response
                .headers_mut()
                .insert(RETRY_AFTER, HeaderValue::from(delay.as_secs()));
        }
        return response;
    }

    if err.is_not_found() {
        return error_reply(StatusCode::NOT_FOUND, "Not found");
    }
    if let Some(e) = err.find::<warp::body::BodyDeserializeError>() {
        return error_reply(
            StatusCode::BAD_REQUEST,
            format!("Invalid JSON body: {}", e),
        );
    }
    if err.find::<warp::reject::PayloadTooLarge>().is_some() {
        return error_reply(StatusCode::PAYLOAD_TOO_LARGE, "Request body too large");
    }
    if err.find::<warp::reject::UnsupportedMediaType>().is_some() {
        return error_reply(
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "Content-Type must be application/json",
        );
    }
    if err.find::<warp::reject::LengthRequired>().is_some() {
        return error_reply(StatusCode::LENGTH_REQUIRED, "Content-Length required");
    }
    if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        return error_reply(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed");
    }

    error!(rejection = ?err, "unhandled rejection");
    error_reply(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
}

fn error_reply(status: StatusCode, message: impl Into<String>) -> Response {
    warp::reply::with_status(warp::reply::json(&ErrorResponse::new(message)), status)
        .into_response()
}
