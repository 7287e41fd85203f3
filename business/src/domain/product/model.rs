use super::value_objects::{Barcode, Priority, ScanStatus};

pub const DATA_SOURCE: &str = "OpenFoodFacts";
pub const CARBON_FOOTPRINT_UNIT: &str = "kg CO2e/kg";
pub const UNKNOWN_PRODUCT_NAME: &str = "Unknown Product";
pub const UNKNOWN_BRAND: &str = "Unknown Brand";
pub const NO_BARCODE_MESSAGE: &str =
    "No barcode detected. Please ensure the barcode is clearly visible.";

/// Product attributes read from the external catalog. Read-only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductRecord {
    pub name: Option<String>,
    pub name_en: Option<String>,
    pub brand: Option<String>,
    pub image_url: Option<String>,
    /// Comma-separated category taxonomy, most generic first.
    pub categories: Option<String>,
    pub ingredients_text: Option<String>,
    pub nutrition_grade: Option<String>,
    pub eco_grade: Option<String>,
    pub packaging_tags: Vec<String>,
    /// kg CO2e per kg, from the Agribalyse life-cycle assessment.
    pub carbon_footprint: Option<f64>,
}

impl ProductRecord {
    pub fn display_name(&self) -> String {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .or(self.name_en.as_deref().filter(|n| !n.is_empty()))
            .unwrap_or(UNKNOWN_PRODUCT_NAME)
            .to_string()
    }

    pub fn display_brand(&self) -> String {
        self.brand.as_deref().unwrap_or(UNKNOWN_BRAND)
            .to_string()
    }
}

/// Outcome of a primary catalog lookup. A missing product is not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductLookup {
    Found(ProductRecord),
    NotFound,
}

/// A same-category product returned by the catalog search, before ranking.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateProduct {
    pub name: Option<String>,
    pub brand: Option<String>,
    pub eco_grade: Option<String>,
    pub image_url: Option<String>,
    pub barcode: Option<String>,
}

/// A greener product suggested in place of the scanned one.
#[derive(Debug, Clone, PartialEq)]
pub struct Alternative {
    pub name: String,
    pub brand: String,
    pub eco_grade: Option<String>,
    pub image_url: Option<String>,
    pub barcode: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub icon: String,
    pub text: String,
    pub priority: Priority,
}

impl Recommendation {
    pub fn new(icon: &str, text: impl Into<String>, priority: Priority) -> Self {
        Self {
            icon: icon.to_string(),
            text: text.into(),
            priority,
        }
    }
}

/// Product fields echoed back on a successful scan.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductSummary {
    pub name: String,
    pub brand: String,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub ingredients_text: Option<String>,
    pub nutri_score: Option<String>,
    pub eco_score: Option<String>,
}

impl From<&ProductRecord> for ProductSummary {
    fn from(record: &ProductRecord) -> Self {
        Self {
            name: record.display_name(),
            brand: record.display_brand(),
            image_url: record.image_url.clone(),
            category: record.categories.clone(),
            ingredients_text: record.ingredients_text.clone(),
            nutri_score: record.nutrition_grade.clone(),
            eco_score: record.eco_grade.clone(),
        }
    }
}

/// The sustainability report returned for one request. Built once, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanResult {
    pub status: ScanStatus,
    pub gtin: Option<Barcode>,
    pub product: Option<ProductSummary>,
    pub carbon_footprint: Option<f64>,
    pub carbon_footprint_unit: Option<String>,
    pub is_high_carbon: bool,
    pub recommendations: Vec<Recommendation>,
    pub alternatives: Vec<Alternative>,
    pub source: Option<String>,
    pub message: Option<String>,
}

impl ScanResult {
    pub fn no_barcode_detected() -> Self {
        Self::not_found(None, NO_BARCODE_MESSAGE.to_string())
    }

    pub fn product_not_found(barcode: Barcode) -> Self {
        let message = format!("Product with barcode {} not found in database.", barcode);
        Self::not_found(Some(barcode), message)
    }

    pub fn success(
        barcode: Barcode,
        record: &ProductRecord,
        is_high_carbon: bool,
        recommendations: Vec<Recommendation>,
        alternatives: Vec<Alternative>,
    ) -> Self {
        Self {
            status: ScanStatus::Success,
            gtin: Some(barcode),
            product: Some(ProductSummary::from(record)),
            carbon_footprint: record.carbon_footprint,
            carbon_footprint_unit: record
                .carbon_footprint
                .map(|_| CARBON_FOOTPRINT_UNIT.to_string()),
            is_high_carbon,
            recommendations,
            alternatives,
            source: Some(DATA_SOURCE.to_string()),
            message: None,
        }
    }

    fn not_found(gtin: Option<Barcode>, message: String) -> Self {
        Self {
            status: ScanStatus::NotFound,
            gtin,
            product: None,
            carbon_footprint: None,
            carbon_footprint_unit: None,
            is_high_carbon: false,
            recommendations: vec![],
            alternatives: vec![],
            source: None,
            message: Some(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_fall_back_to_english_name_then_placeholder() {
        let mut record = ProductRecord {
            name: Some(String::new()),
            name_en: Some("Oat drink".to_string()),
            ..Default::default()
        };
        assert_eq!(record.display_name(), "Oat drink");

        record.name_en = None;
        assert_eq!(record.display_name(), UNKNOWN_PRODUCT_NAME);
    }

    #[test]
    fn should_use_placeholder_brand_when_missing() {
        let record = ProductRecord::default();
        assert_eq!(record.display_brand(), UNKNOWN_BRAND);
    }

    #[test]
    fn should_keep_empty_brand_as_published() {
        let record = ProductRecord {
            brand: Some(String::new()),
            ..ProductRecord::default()
        };

        assert_eq!(record.display_brand(), "");
    }

    #[test]
    fn should_build_not_found_result_with_barcode_in_message() {
        let barcode = Barcode::parse("5901234123457").unwrap();

        let result = ScanResult::product_not_found(barcode.clone());

        assert_eq!(result.status, ScanStatus::NotFound);
        assert_eq!(result.gtin, Some(barcode));
        assert_eq!(
            result.message.as_deref(),
            Some("Product with barcode 5901234123457 not found in database.")
        );
        assert!(result.recommendations.is_empty());
        assert!(result.source.is_none());
    }

    #[test]
    fn should_set_carbon_unit_only_when_figure_present() {
        let barcode = Barcode::parse("96385074").unwrap();
        let without = ProductRecord::default();
        let with = ProductRecord {
            carbon_footprint: Some(1.2),
            ..Default::default()
        };

        let a = ScanResult::success(barcode.clone(), &without, false, vec![], vec![]);
        let b = ScanResult::success(barcode, &with, false, vec![], vec![]);

        assert!(a.carbon_footprint_unit.is_none());
        assert_eq!(b.carbon_footprint_unit.as_deref(), Some(CARBON_FOOTPRINT_UNIT));
        assert_eq!(b.source.as_deref(), Some(DATA_SOURCE));
    }
}
