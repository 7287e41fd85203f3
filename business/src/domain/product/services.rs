use async_trait::async_trait;

use super::errors::BarcodeReadError;
use super::model::{CandidateProduct, ProductLookup};
use super::value_objects::Barcode;
use crate::domain::errors::CatalogError;

/// Service port for finding barcode symbols in a raster image.
///
/// Returns the text payload of every detected symbol, in detection order.
/// An image without any symbol is `Ok(vec![])`, not an error.
#[async_trait]
pub trait BarcodeReaderService: Send + Sync {
    async fn detect(&self, image: Vec<u8>) -> Result<Vec<String>, BarcodeReadError>;
}

/// Service port for the external product database.
#[async_trait]
pub trait ProductCatalogService: Send + Sync {
    /// Primary lookup. A product the catalog does not know is
    /// `Ok(ProductLookup::NotFound)`.
    async fn find_by_barcode(&self, barcode: &Barcode) -> Result<ProductLookup, CatalogError>;

    /// Products of the given category, best eco score first.
    async fn search_by_category(
        &self,
        category_tag: &str,
        page_size: usize,
    ) -> Result<Vec<CandidateProduct>, CatalogError>;
}
