use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use business::domain::errors::CatalogError;
use business::domain::product::model::{CandidateProduct, ProductLookup, ProductRecord};
use business::domain::product::services::ProductCatalogService;
use business::domain::product::value_objects::Barcode;

use crate::client::OpenFoodFactsClient;

#[derive(Deserialize)]
struct OpenFoodFactsResponse {
    #[serde(default)]
    status: Option<Value>,
    #[serde(default)]
    product: Option<Value>,
}

#[derive(Deserialize)]
struct OpenFoodFactsProduct {
    product_name: Option<String>,
    product_name_en: Option<String>,
    brands: Option<String>,
    image_front_url: Option<String>,
    categories: Option<String>,
    ingredients_text_en: Option<String>,
    nutriscore_grade: Option<String>,
    ecoscore_grade: Option<String>,
    packaging_tags: Option<Vec<String>>,
    ecoscore_data: Option<Value>,
}

#[derive(Deserialize)]
struct OpenFoodFactsSearchResponse {
    #[serde(default)]
    products: Vec<OpenFoodFactsSearchProduct>,
}

#[derive(Deserialize)]
struct OpenFoodFactsSearchProduct {
    product_name: Option<String>,
    brands: Option<String>,
    ecoscore_grade: Option<String>,
    image_front_small_url: Option<String>,
    code: Option<String>,
}

impl From<OpenFoodFactsProduct> for ProductRecord {
    fn from(product: OpenFoodFactsProduct) -> Self {
        let carbon_footprint = product
            .ecoscore_data
            .as_ref()
            .and_then(|data| data.get("agribalyse"))
            .and_then(|agribalyse| agribalyse.get("co2_total"))
            .and_then(Value::as_f64);

        Self {
            name: product.product_name,
            name_en: product.product_name_en,
            brand: product.brands,
            image_url: product.image_front_url,
            categories: product.categories,
            ingredients_text: product.ingredients_text_en,
            nutrition_grade: product.nutriscore_grade,
            eco_grade: product.ecoscore_grade,
            packaging_tags: product.packaging_tags.unwrap_or_default(),
            carbon_footprint,
        }
    }
}

impl From<OpenFoodFactsSearchProduct> for CandidateProduct {
    fn from(product: OpenFoodFactsSearchProduct) -> Self {
        Self {
            name: product.product_name,
            brand: product.brands,
            eco_grade: product.ecoscore_grade,
            image_url: product.image_front_small_url,
            barcode: product.code,
        }
    }
}

pub struct ProductCatalogOpenFoodFacts {
    client: OpenFoodFactsClient,
}

impl ProductCatalogOpenFoodFacts {
    pub fn new(client: OpenFoodFactsClient) -> Self {
        Self { client }
    }

    /// `status: 0`, a missing product or an empty product object all mean
    /// "not found". The HTTP status code is not consulted: unknown barcodes
    /// come back as 404 with a regular JSON body.
    fn interpret_lookup(body: OpenFoodFactsResponse) -> Result<ProductLookup, CatalogError> {
        if body.status.as_ref().and_then(Value::as_f64) == Some(0.0) {
            return Ok(ProductLookup::NotFound);
        }

        let product = match body.product {
            Some(Value::Object(fields)) if !fields.is_empty() => Value::Object(fields),
            None | Some(Value::Null) | Some(Value::Object(_)) => {
                return Ok(ProductLookup::NotFound);
            }
            Some(_) => return Err(CatalogError::InvalidResponse),
        };

        let product: OpenFoodFactsProduct =
            serde_json::from_value(product).map_err(|_| CatalogError::InvalidResponse)?;

        Ok(ProductLookup::Found(product.into()))
    }

    fn search_query(category_tag: &str, page_size: usize) -> Vec<(&'static str, String)> {
        vec![
            ("action", "process".to_string()),
            ("tagtype_0", "categories".to_string()),
            ("tag_contains_0", "contains".to_string()),
            ("tag_0", category_tag.to_string()),
            ("sort_by", "ecoscore_score".to_string()),
            ("page_size", page_size.to_string()),
            ("json", "1".to_string()),
        ]
    }

    fn map_transport_error(err: reqwest::Error) -> CatalogError {
        if err.is_decode() {
            CatalogError::InvalidResponse
        } else {
            CatalogError::Unreachable
        }
    }
}

#[async_trait]
impl ProductCatalogService for ProductCatalogOpenFoodFacts {
    async fn find_by_barcode(&self, barcode: &Barcode) -> Result<ProductLookup, CatalogError> {
        let url = self.client.product_url(barcode.as_str());

        let response = self
            .client
            .client
            .get(&url)
            .send()
            .await
            .map_err(Self::map_transport_error)?;

        let body: OpenFoodFactsResponse = response
            .json()
            .await
            .map_err(Self::map_transport_error)?;

        Self::interpret_lookup(body)
    }

    async fn search_by_category(
        &self,
        category_tag: &str,
        page_size: usize,
    ) -> Result<Vec<CandidateProduct>, CatalogError> {
        let response = self
            .client
            .client
            .get(self.client.search_url())
            .query(&Self::search_query(category_tag, page_size))
            .send()
            .await
            .map_err(Self::map_transport_error)?;

        let body: OpenFoodFactsSearchResponse = response
            .json()
            .await
            .map_err(Self::map_transport_error)?;

        Ok(body
            .products
            .into_iter()
            .take(page_size)
            .map(CandidateProduct::from)
            .collect())
    }
}
