use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::ScanResult;

pub struct ScanImageParams {
    pub image: Vec<u8>,
}

pub struct LookupBarcodeParams {
    pub barcode: String,
}

#[async_trait]
pub trait ScanProductUseCase: Send + Sync {
    async fn execute_by_image(&self, params: ScanImageParams) -> Result<ScanResult, ProductError>;

    async fn execute_by_barcode(
        &self,
        params: LookupBarcodeParams,
    ) -> Result<ScanResult, ProductError>;
}
