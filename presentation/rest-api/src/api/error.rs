use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Body returned with every 4xx/5xx answer.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    /// Error category, e.g. "ValidationError"
    pub name: String,
    /// Code-style message, e.g. "product.invalid_barcode"
    pub message: String,
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
