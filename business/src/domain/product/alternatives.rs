use super::model::{Alternative, CandidateProduct};
use super::scoring::SustainabilityPolicy;

const UNKNOWN: &str = "Unknown";

/// Category tag used to search for peers: the first comma-separated
/// segment, trimmed. `None` when there is nothing to search for.
pub fn category_search_tag(categories: Option<&str>) -> Option<&str> {
    categories
        .and_then(|c| c.split(',').next())
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
}

/// Keeps the candidates whose eco score strictly beats the current
/// product's, in search order, and truncates to `max_alternatives`.
///
/// Only the first `search_page_size` candidates are considered.
pub fn rank_alternatives(
    candidates: Vec<CandidateProduct>,
    current_eco_grade: Option<&str>,
    policy: &SustainabilityPolicy,
) -> Vec<Alternative> {
    let current_score = policy.eco_grade_score(current_eco_grade);

    candidates
        .into_iter()
        .take(policy.search_page_size)
        .filter(|candidate| policy.eco_grade_score(candidate.eco_grade.as_deref()) > current_score)
        .take(policy.max_alternatives)
        .map(|candidate| Alternative {
            name: candidate.name.unwrap_or_else(|| UNKNOWN.to_string()),
            brand: candidate.brand.unwrap_or_else(|| UNKNOWN.to_string()),
            eco_grade: candidate.eco_grade,
            image_url: candidate.image_url,
            barcode: candidate.barcode,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn candidate(name: &str, grade: Option<&str>) -> CandidateProduct {
        CandidateProduct {
            name: Some(name.to_string()),
            brand: Some("Acme".to_string()),
            eco_grade: grade.map(str::to_string),
            image_url: None,
            barcode: Some("5901234123457".to_string()),
        }
    }

    #[test]
    fn should_take_first_category_segment_trimmed() {
        assert_eq!(
            category_search_tag(Some(" Dairies , Milks, Whole milks")),
            Some("Dairies")
        );
        assert_eq!(category_search_tag(Some("Snacks")), Some("Snacks"));
    }

    #[test]
    fn should_return_no_tag_for_missing_or_blank_category() {
        assert_eq!(category_search_tag(None), None);
        assert_eq!(category_search_tag(Some("")), None);
        assert_eq!(category_search_tag(Some("  ,Milks")), None);
    }

    #[test]
    fn should_keep_only_strictly_better_candidates_in_search_order() {
        // Arrange
        let candidates = vec![
            candidate("Same grade", Some("c")),
            candidate("Best", Some("a")),
            candidate("Worse", Some("e")),
            candidate("Better", Some("b")),
        ];

        // Act
        let ranked = rank_alternatives(candidates, Some("c"), &SustainabilityPolicy::default());

        // Assert
        let names: Vec<&str> = ranked.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Best", "Better"]);
    }

    #[test]
    fn should_truncate_to_three_alternatives() {
        let candidates = vec![
            candidate("One", Some("a")),
            candidate("Two", Some("a")),
            candidate("Three", Some("b")),
            candidate("Four", Some("a")),
            candidate("Five", Some("b")),
        ];

        let ranked = rank_alternatives(candidates, Some("e"), &SustainabilityPolicy::default());

        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[2].name, "Three");
    }

    #[test]
    fn should_ignore_candidates_beyond_the_page_size() {
        let mut candidates: Vec<CandidateProduct> =
            (0..5).map(|i| candidate(&format!("Worse {i}"), Some("e"))).collect();
        candidates.push(candidate("Sixth", Some("a")));

        let ranked = rank_alternatives(candidates, Some("d"), &SustainabilityPolicy::default());

        assert!(ranked.is_empty());
    }

    #[test]
    fn should_default_missing_name_and_brand_to_unknown() {
        let candidates = vec![CandidateProduct {
            eco_grade: Some("a".to_string()),
            ..Default::default()
        }];

        let ranked = rank_alternatives(candidates, Some("d"), &SustainabilityPolicy::default());

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].name, "Unknown");
        assert_eq!(ranked[0].brand, "Unknown");
        assert!(ranked[0].image_url.is_none());
        assert!(ranked[0].barcode.is_none());
    }

    #[test]
    fn should_let_ungraded_candidate_beat_grade_d_product() {
        let candidates = vec![candidate("Ungraded", None)];

        let ranked = rank_alternatives(candidates, Some("d"), &SustainabilityPolicy::default());

        assert_eq!(ranked.len(), 1);
        assert!(ranked[0].eco_grade.is_none());
    }

    #[test]
    fn should_return_empty_when_nothing_beats_grade_a() {
        let candidates = vec![candidate("Also A", Some("a")), candidate("B", Some("b"))];

        let ranked = rank_alternatives(candidates, Some("a"), &SustainabilityPolicy::default());

        assert!(ranked.is_empty());
    }

    fn grade_strategy() -> impl Strategy<Value = Option<String>> {
        prop_oneof![
            Just(None),
            "[a-eA-E]".prop_map(Some),
            Just(Some("unknown".to_string())),
        ]
    }

    proptest! {
        #[test]
        fn should_only_return_up_to_three_strictly_better_alternatives(
            current in grade_strategy(),
            grades in prop::collection::vec(grade_strategy(), 0..10),
        ) {
            let policy = SustainabilityPolicy::default();
            let candidates: Vec<CandidateProduct> = grades
                .iter()
                .enumerate()
                .map(|(i, g)| CandidateProduct {
                    name: Some(format!("p{i}")),
                    eco_grade: g.clone(),
                    ..Default::default()
                })
                .collect();

            let ranked = rank_alternatives(candidates, current.as_deref(), &policy);

            let current_score = policy.eco_grade_score(current.as_deref());
            prop_assert!(ranked.len() <= 3);
            for alternative in &ranked {
                prop_assert!(policy.eco_grade_score(alternative.eco_grade.as_deref()) > current_score);
            }
            let indices: Vec<usize> = ranked
                .iter()
                .map(|a| a.name[1..].parse::<usize>().unwrap())
                .collect();
            prop_assert!(indices.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(indices.iter().all(|i| *i < 5));
        }
    }
}
