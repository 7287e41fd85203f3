use poem_openapi::types::multipart::Upload;
use poem_openapi::{Enum, Multipart, Object};
use serde::{Deserialize, Serialize};

use business::domain::product::model::{Alternative, Recommendation, ScanResult};
use business::domain::product::value_objects::{Priority, ScanStatus};

#[derive(Debug, Clone, Serialize, Deserialize, Enum)]
pub enum ScanStatusDto {
    #[oai(rename = "success")]
    Success,
    #[oai(rename = "not_found")]
    NotFound,
}

impl From<ScanStatus> for ScanStatusDto {
    fn from(status: ScanStatus) -> Self {
        match status {
            ScanStatus::Success => ScanStatusDto::Success,
            ScanStatus::NotFound => ScanStatusDto::NotFound,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Enum)]
pub enum PriorityDto {
    #[oai(rename = "low")]
    Low,
    #[oai(rename = "medium")]
    Medium,
    #[oai(rename = "high")]
    High,
}

impl From<Priority> for PriorityDto {
    fn from(priority: Priority) -> Self {
        match priority {
            Priority::Low => PriorityDto::Low,
            Priority::Medium => PriorityDto::Medium,
            Priority::High => PriorityDto::High,
        }
    }
}

/// Multipart body of a barcode scan.
#[derive(Multipart)]
pub struct ScanImageRequest {
    /// Photo of the product barcode
    pub image: Upload,
}

/// A single sustainability recommendation.
#[derive(Debug, Clone, Object)]
pub struct RecommendationResponse {
    /// Emoji glyph shown next to the text
    pub icon: String,
    /// Human-readable advice
    pub text: String,
    /// Urgency of the advice
    pub priority: PriorityDto,
}

impl From<Recommendation> for RecommendationResponse {
    fn from(recommendation: Recommendation) -> Self {
        Self {
            icon: recommendation.icon,
            text: recommendation.text,
            priority: recommendation.priority.into(),
        }
    }
}

/// A product from the same category with a better eco score.
#[derive(Debug, Clone, Object)]
pub struct AlternativeResponse {
    pub name: String,
    pub brand: String,
    /// Eco grade (a-e) as published by the catalog
    #[oai(skip_serializing_if_is_none)]
    pub eco_score: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub image_url: Option<String>,
    /// Barcode of the alternative
    #[oai(skip_serializing_if_is_none)]
    pub gtin: Option<String>,
}

impl From<Alternative> for AlternativeResponse {
    fn from(alternative: Alternative) -> Self {
        Self {
            name: alternative.name,
            brand: alternative.brand,
            eco_score: alternative.eco_grade,
            image_url: alternative.image_url,
            gtin: alternative.barcode,
        }
    }
}

/// Sustainability report for a scanned or looked-up product.
#[derive(Debug, Clone, Object)]
pub struct ScanResultResponse {
    /// "success" or "not_found"
    pub status: ScanStatusDto,
    /// Barcode (GTIN) of the product
    #[oai(skip_serializing_if_is_none)]
    pub gtin: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub brand: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub image_url: Option<String>,
    /// Comma-separated category taxonomy
    #[oai(skip_serializing_if_is_none)]
    pub category: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub ingredients_text: Option<String>,
    /// Nutrition grade (a-e)
    #[oai(skip_serializing_if_is_none)]
    pub nutri_score: Option<String>,
    /// Eco grade (a-e)
    #[oai(skip_serializing_if_is_none)]
    pub eco_score: Option<String>,
    /// Carbon footprint in `carbon_footprint_unit`
    #[oai(skip_serializing_if_is_none)]
    pub carbon_footprint: Option<f64>,
    #[oai(skip_serializing_if_is_none)]
    pub carbon_footprint_unit: Option<String>,
    /// True when the carbon footprint exceeds 2.0 kg CO2e/kg
    pub is_high_carbon: bool,
    pub recommendations: Vec<RecommendationResponse>,
    pub alternatives: Vec<AlternativeResponse>,
    /// Data source of the product record
    #[oai(skip_serializing_if_is_none)]
    pub source: Option<String>,
    /// Explanation for not-found results
    #[oai(skip_serializing_if_is_none)]
    pub message: Option<String>,
}

impl From<ScanResult> for ScanResultResponse {
    fn from(result: ScanResult) -> Self {
        let product = result.product;
        Self {
            status: result.status.into(),
            gtin: result.gtin.map(|g| g.to_string()),
            name: product.as_ref().map(|p| p.name.clone()),
            brand: product.as_ref().map(|p| p.brand.clone()),
            image_url: product.as_ref().and_then(|p| p.image_url.clone()),
            category: product.as_ref().and_then(|p| p.category.clone()),
            ingredients_text: product.as_ref().and_then(|p| p.ingredients_text.clone()),
            nutri_score: product.as_ref().and_then(|p| p.nutri_score.clone()),
            eco_score: product.as_ref().and_then(|p| p.eco_score.clone()),
            carbon_footprint: result.carbon_footprint,
            carbon_footprint_unit: result.carbon_footprint_unit,
            is_high_carbon: result.is_high_carbon,
            recommendations: result
                .recommendations
                .into_iter()
                .map(RecommendationResponse::from)
                .collect(),
            alternatives: result
                .alternatives
                .into_iter()
                .map(AlternativeResponse::from)
                .collect(),
            source: result.source,
            message: result.message,
        }
    }
}
