use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ProductError::EmptyImage => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.empty_image",
            ),
            ProductError::UnreadableUpload => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.unreadable_upload",
            ),
            ProductError::InvalidBarcode => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.invalid_barcode",
            ),
            ProductError::Catalog(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "product.fetch_failed",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}
