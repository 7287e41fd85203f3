use crate::domain::errors::CatalogError;

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.empty_image")]
    EmptyImage,
    #[error("product.unreadable_upload")]
    UnreadableUpload,
    #[error("product.invalid_barcode")]
    InvalidBarcode,
    #[error("product.fetch_failed")]
    Catalog(#[from] CatalogError),
}

/// Failures of the barcode reader. These never reach the caller: the scan
/// use case treats them as "no barcode detected".
#[derive(Debug, thiserror::Error)]
pub enum BarcodeReadError {
    #[error("barcode.unreadable_image")]
    UnreadableImage,
    #[error("barcode.decoder_failed")]
    DecoderFailed,
}
