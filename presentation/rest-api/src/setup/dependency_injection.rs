use std::sync::Arc;

use barcode::reader::BarcodeReaderRxing;
use logger::TracingLogger;
use openfoodfacts::client::OpenFoodFactsClient;
use openfoodfacts::product_catalog::ProductCatalogOpenFoodFacts;

use business::application::product::scan::ScanProductUseCaseImpl;
use business::domain::product::scoring::SustainabilityPolicy;

use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub product_api: crate::api::product::routes::ProductApi,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let catalog_client =
            OpenFoodFactsClient::new(&config.catalog.user_agent, config.catalog.base_url.clone())?;
        let catalog = Arc::new(ProductCatalogOpenFoodFacts::new(catalog_client));
        let reader = Arc::new(BarcodeReaderRxing::new());

        // Product use cases
        let scan_use_case = Arc::new(ScanProductUseCaseImpl {
            reader,
            catalog,
            policy: SustainabilityPolicy::default(),
            logger,
        });

        let product_api = crate::api::product::routes::ProductApi::new(scan_use_case);

        Ok(Self {
            health_api,
            product_api,
        })
    }
}
