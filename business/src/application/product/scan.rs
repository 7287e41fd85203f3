use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::alternatives::{category_search_tag, rank_alternatives};
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Alternative, ProductLookup, ScanResult};
use crate::domain::product::scoring::{SustainabilityPolicy, generate_recommendations};
use crate::domain::product::services::{BarcodeReaderService, ProductCatalogService};
use crate::domain::product::use_cases::scan::{
    LookupBarcodeParams, ScanImageParams, ScanProductUseCase,
};
use crate::domain::product::value_objects::Barcode;

pub struct ScanProductUseCaseImpl {
    pub reader: Arc<dyn BarcodeReaderService>,
    pub catalog: Arc<dyn ProductCatalogService>,
    pub policy: SustainabilityPolicy,
    pub logger: Arc<dyn Logger>,
}

impl ScanProductUseCaseImpl {
    /// First detected symbol, if it is a valid GTIN. Reader failures are
    /// logged and reported as "no barcode".
    async fn extract_barcode(&self, image: Vec<u8>) -> Option<Barcode> {
        let payloads = match self.reader.detect(image).await {
            Ok(payloads) => payloads,
            Err(err) => {
                self.logger.warn(&format!("Barcode decode error: {}", err));
                return None;
            }
        };

        let first = payloads.into_iter().next()?;
        match Barcode::parse(&first) {
            Ok(barcode) => {
                self.logger.debug(&format!("Detected barcode: {}", barcode));
                Some(barcode)
            }
            Err(_) => {
                self.logger
                    .info(&format!("Detected symbol is not a GTIN: {}", first));
                None
            }
        }
    }

    async fn build_report(&self, barcode: Barcode) -> Result<ScanResult, ProductError> {
        self.logger
            .info(&format!("Looking up product by barcode: {}", barcode));

        let lookup = self
            .catalog
            .find_by_barcode(&barcode)
            .await
            .inspect_err(|err| {
                self.logger
                    .error(&format!("Failed to fetch product {}: {}", barcode, err))
            })?;

        let product = match lookup {
            ProductLookup::Found(product) => product,
            ProductLookup::NotFound => {
                self.logger
                    .info(&format!("Product {} not found in catalog", barcode));
                return Ok(ScanResult::product_not_found(barcode));
            }
        };

        let is_high_carbon = self.policy.is_high_carbon(product.carbon_footprint);
        let recommendations = generate_recommendations(&product, &self.policy);

        let alternatives = if is_high_carbon {
            self.find_alternatives(product.categories.as_deref(), product.eco_grade.as_deref())
                .await
        } else {
            vec![]
        };

        self.logger.info(&format!(
            "Product {} scored: {} recommendations, {} alternatives",
            barcode,
            recommendations.len(),
            alternatives.len()
        ));

        Ok(ScanResult::success(
            barcode,
            &product,
            is_high_carbon,
            recommendations,
            alternatives,
        ))
    }

    /// Alternatives are supplementary: any catalog failure yields an empty list.
    async fn find_alternatives(
        &self,
        categories: Option<&str>,
        current_eco_grade: Option<&str>,
    ) -> Vec<Alternative> {
        let Some(tag) = category_search_tag(categories) else {
            return vec![];
        };

        match self
            .catalog
            .search_by_category(tag, self.policy.search_page_size)
            .await
        {
            Ok(candidates) => rank_alternatives(candidates, current_eco_grade, &self.policy),
            Err(err) => {
                self.logger
                    .warn(&format!("Error fetching alternatives for {}: {}", tag, err));
                vec![]
            }
        }
    }
}

#[async_trait]
impl ScanProductUseCase for ScanProductUseCaseImpl {
    async fn execute_by_image(&self, params: ScanImageParams) -> Result<ScanResult, ProductError> {
        if params.image.is_empty() {
            return Err(ProductError::EmptyImage);
        }

        self.logger
            .info(&format!("Scanning image of {} bytes", params.image.len()));

        match self.extract_barcode(params.image).await {
            Some(barcode) => self.build_report(barcode).await,
            None => Ok(ScanResult::no_barcode_detected()),
        }
    }

    async fn execute_by_barcode(
        &self,
        params: LookupBarcodeParams,
    ) -> Result<ScanResult, ProductError> {
        let barcode = Barcode::parse(&params.barcode)?;
        self.build_report(barcode).await
    }
}
