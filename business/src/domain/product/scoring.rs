use super::model::{ProductRecord, Recommendation};
use super::value_objects::Priority;

/// Thresholds and tables driving the scorer and the alternatives ranker.
///
/// `Default` holds the production values; tests build their own.
#[derive(Debug, Clone, PartialEq)]
pub struct SustainabilityPolicy {
    /// Carbon footprint (kg CO2e/kg) above which a product counts as high carbon.
    pub carbon_threshold: f64,
    /// Eco grade to numeric score. Used for ranking only, never shown.
    pub grade_scores: [(&'static str, u8); 5],
    /// Score for a missing or unrecognised eco grade.
    pub unknown_grade_score: u8,
    /// Number of category peers requested from the catalog.
    pub search_page_size: usize,
    /// Upper bound on alternatives returned to the caller.
    pub max_alternatives: usize,
}

impl Default for SustainabilityPolicy {
    fn default() -> Self {
        Self {
            carbon_threshold: 2.0,
            grade_scores: [("a", 95), ("b", 80), ("c", 65), ("d", 45), ("e", 20)],
            unknown_grade_score: 50,
            search_page_size: 5,
            max_alternatives: 3,
        }
    }
}

impl SustainabilityPolicy {
    /// True iff a carbon figure is present and strictly above the threshold.
    pub fn is_high_carbon(&self, carbon_footprint: Option<f64>) -> bool {
        carbon_footprint.is_some_and(|co2| co2 > self.carbon_threshold)
    }

    /// Case-insensitive grade lookup; unknown or missing grades score
    /// `unknown_grade_score`.
    pub fn eco_grade_score(&self, grade: Option<&str>) -> u8 {
        let grade = grade.map(str::to_lowercase).unwrap_or_default();
        self.grade_scores
            .iter()
            .find(|(g, _)| *g == grade)
            .map(|(_, score)| *score)
            .unwrap_or(self.unknown_grade_score)
    }
}

/// A recommendation rule fires at most one recommendation.
pub type RecommendationRule = fn(&ProductRecord, &SustainabilityPolicy) -> Option<Recommendation>;

/// Rules in evaluation order. Output order follows this list.
pub const RECOMMENDATION_RULES: [RecommendationRule; 4] = [
    high_carbon_rule,
    eco_grade_rule,
    nutrition_grade_rule,
    plastic_packaging_rule,
];

/// Runs every rule in order and collects what fires. Falls back to a single
/// "acceptable" recommendation when nothing does.
pub fn generate_recommendations(
    product: &ProductRecord,
    policy: &SustainabilityPolicy,
) -> Vec<Recommendation> {
    let mut recommendations: Vec<Recommendation> = RECOMMENDATION_RULES
        .iter()
        .filter_map(|rule| rule(product, policy))
        .collect();

    if recommendations.is_empty() {
        recommendations.push(Recommendation::new(
            "✅",
            "This product has acceptable sustainability metrics",
            Priority::Low,
        ));
    }

    recommendations
}

pub fn high_carbon_rule(
    product: &ProductRecord,
    policy: &SustainabilityPolicy,
) -> Option<Recommendation> {
    let co2 = product
        .carbon_footprint
        .filter(|co2| *co2 > policy.carbon_threshold)?;

    Some(Recommendation::new(
        "🌍",
        format!(
            "High carbon footprint ({:.2} kg CO2e). Consider eco-friendly alternatives below.",
            co2
        ),
        Priority::High,
    ))
}

// Grades are matched exactly as published (lowercase). Unlike ranking,
// there is no fallback for unknown grades here.
pub fn eco_grade_rule(product: &ProductRecord, _: &SustainabilityPolicy) -> Option<Recommendation> {
    match product.eco_grade.as_deref() {
        Some("d" | "e") => Some(Recommendation::new(
            "🌱",
            "Low environmental score - look for products with better eco ratings",
            Priority::High,
        )),
        Some("a" | "b") => Some(Recommendation::new(
            "✅",
            "Good environmental score! This product has lower environmental impact",
            Priority::Low,
        )),
        _ => None,
    }
}

pub fn nutrition_grade_rule(
    product: &ProductRecord,
    _: &SustainabilityPolicy,
) -> Option<Recommendation> {
    match product.nutrition_grade.as_deref() {
        Some(grade @ ("d" | "e")) => Some(Recommendation::new(
            "❤️",
            format!(
                "Nutrition score is {} - consider healthier options",
                grade.to_uppercase()
            ),
            Priority::Medium,
        )),
        _ => None,
    }
}

pub fn plastic_packaging_rule(
    product: &ProductRecord,
    _: &SustainabilityPolicy,
) -> Option<Recommendation> {
    product
        .packaging_tags
        .iter()
        .any(|tag| tag.to_lowercase().contains("plastic"))
        .then(|| {
            Recommendation::new(
                "♻️",
                "Contains plastic packaging - recycle properly or choose alternatives with less plastic",
                Priority::Medium,
            )
        })
}
