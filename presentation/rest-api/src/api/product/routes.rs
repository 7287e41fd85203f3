use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::product::errors::ProductError;
use business::domain::product::use_cases::scan::{
    LookupBarcodeParams, ScanImageParams, ScanProductUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{ScanImageRequest, ScanResultResponse};
use crate::api::tags::ApiTags;

pub struct ProductApi {
    scan_use_case: Arc<dyn ScanProductUseCase>,
}

impl ProductApi {
    pub fn new(scan_use_case: Arc<dyn ScanProductUseCase>) -> Self {
        Self { scan_use_case }
    }
}

/// Product sustainability API
///
/// Endpoints for scanning barcodes and reporting on a product's environmental impact.
#[OpenApi]
impl ProductApi {
    /// Scan a barcode photo
    ///
    /// Decodes the barcode in the uploaded image, looks the product up in
    /// Open Food Facts and returns its sustainability report. An image
    /// without a readable barcode yields a `not_found` report, not an error.
    #[oai(path = "/api/scan", method = "post", tag = "ApiTags::Products")]
    async fn scan_product(&self, body: ScanImageRequest) -> ScanResponse {
        let image = match body.image.into_vec().await {
            Ok(bytes) => bytes,
            Err(_) => return ProductError::UnreadableUpload.into_error_response().into(),
        };

        match self
            .scan_use_case
            .execute_by_image(ScanImageParams { image })
            .await
        {
            Ok(result) => ScanResponse::Ok(Json(result.into())),
            Err(err) => err.into_error_response().into(),
        }
    }

    /// Get a product by barcode
    ///
    /// Returns the sustainability report for a GTIN-8, GTIN-12, GTIN-13 or
    /// GTIN-14 barcode. Malformed barcodes are rejected before any lookup.
    #[oai(path = "/api/product/:gtin", method = "get", tag = "ApiTags::Products")]
    async fn get_product(&self, gtin: Path<String>) -> ScanResponse {
        match self
            .scan_use_case
            .execute_by_barcode(LookupBarcodeParams { barcode: gtin.0 })
            .await
        {
            Ok(result) => ScanResponse::Ok(Json(result.into())),
            Err(err) => err.into_error_response().into(),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ScanResponse {
    #[oai(status = 200)]
    Ok(Json<ScanResultResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl From<(poem::http::StatusCode, Json<ErrorResponse>)> for ScanResponse {
    fn from((status, json): (poem::http::StatusCode, Json<ErrorResponse>)) -> Self {
        match status.as_u16() {
            400 => ScanResponse::BadRequest(json),
            _ => ScanResponse::InternalError(json),
        }
    }
}
