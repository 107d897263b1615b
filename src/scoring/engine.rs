use super::band::{classify, Band};
use super::config::Criterion;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Scores a jury member has entered for one project, keyed by criterion id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ScoreSet {
    scores: BTreeMap<String, u32>,
}

impl ScoreSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// All-zero scores over `criteria`.
    pub fn zeroed(criteria: &[Criterion]) -> Self {
        Self {
            scores: criteria.iter().map(|c| (c.id.clone(), 0)).collect(),
        }
    }

    pub fn get(&self, criterion_id: &str) -> Option<u32> {
        self.scores.get(criterion_id).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.scores.iter().map(|(id, score)| (id.as_str(), *score))
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EvaluationResult {
    pub total: u32,
    pub max: u32,
    /// Rounded to the nearest whole percent, 0 when `max` is 0.
    pub percentage: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CriterionScore {
    pub criterion: Criterion,
    pub score: u32,
    pub band: Band,
}

/// Set one criterion's score, clamped to `[0, max_score]`.
///
/// Unknown criterion ids leave the set unchanged.
pub fn set_score(
    mut scores: ScoreSet,
    criteria: &[Criterion],
    criterion_id: &str,
    raw_value: i64,
) -> ScoreSet {
    let Some(criterion) = criteria.iter().find(|c| c.id == criterion_id) else {
        tracing::debug!(criterion_id, "ignoring score for unknown criterion");
        return scores;
    };

    let clamped = clamp_score(raw_value, criterion.max_score);
    if i64::from(clamped) != raw_value {
        tracing::debug!(
            criterion_id,
            raw_value,
            clamped,
            max = criterion.max_score,
            "score clamped into range"
        );
    }
    scores.scores.insert(criterion.id.clone(), clamped);
    scores
}

fn clamp_score(raw_value: i64, max_score: u32) -> u32 {
    // Fits in u32 after clamping to [0, max_score]
    raw_value.clamp(0, i64::from(max_score)) as u32
}

/// Aggregate `scores` over `criteria`.
///
/// Criteria missing from the set count as zero but still add their maximum.
/// Entries for ids that are not in `criteria` are ignored.
pub fn aggregate(scores: &ScoreSet, criteria: &[Criterion]) -> EvaluationResult {
    // Summed in u64 and saturated into u32 so oversized criteria cannot overflow
    let total: u64 = criteria
        .iter()
        .map(|c| u64::from(scores.get(&c.id).unwrap_or(0).min(c.max_score)))
        .sum();
    let max: u64 = criteria.iter().map(|c| u64::from(c.max_score)).sum();

    let percentage = if max > 0 {
        (total as f64 / max as f64 * 100.0).round() as u32
    } else {
        0
    };

    EvaluationResult {
        total: u32::try_from(total).unwrap_or(u32::MAX),
        max: u32::try_from(max).unwrap_or(u32::MAX),
        percentage,
    }
}

/// Per-criterion score and band, in criteria order.
pub fn breakdown(scores: &ScoreSet, criteria: &[Criterion]) -> Vec<CriterionScore> {
    criteria
        .iter()
        .map(|criterion| {
            let score = scores.get(&criterion.id).unwrap_or(0).min(criterion.max_score);
            CriterionScore {
                criterion: criterion.clone(),
                score,
                band: classify(score, criterion.max_score),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{default_criteria, EvaluationType};
    use proptest::prelude::*;

    fn sample_criteria() -> Vec<Criterion> {
        vec![
            Criterion::new("innovation", "Innovation", 20),
            Criterion::new("presentation", "Presentation", 15),
            Criterion::new("documentation", "Documentation", 10),
        ]
    }

    #[test]
    fn test_set_score_in_range() {
        let criteria = sample_criteria();
        let scores = set_score(ScoreSet::new(), &criteria, "innovation", 12);
        assert_eq!(scores.get("innovation"), Some(12));
    }

    #[test]
    fn test_set_score_clamps_high_and_low() {
        let criteria = sample_criteria();
        let scores = set_score(ScoreSet::new(), &criteria, "presentation", 99);
        let scores = set_score(scores, &criteria, "documentation", -4);
        assert_eq!(scores.get("presentation"), Some(15));
        assert_eq!(scores.get("documentation"), Some(0));
    }

    #[test]
    fn test_set_score_unknown_criterion_is_noop() {
        let criteria = sample_criteria();
        let before = set_score(ScoreSet::new(), &criteria, "innovation", 5);
        let after = set_score(before.clone(), &criteria, "teamwork", 5);
        assert_eq!(before, after);
    }

    #[test]
    fn test_set_score_overwrites() {
        let criteria = sample_criteria();
        let scores = set_score(ScoreSet::new(), &criteria, "innovation", 5);
        let scores = set_score(scores, &criteria, "innovation", 18);
        assert_eq!(scores.get("innovation"), Some(18));
        assert_eq!(scores.len(), 1);
    }

    #[test]
    fn test_aggregate_missing_criteria_count_toward_max() {
        let criteria = sample_criteria();
        let scores = set_score(ScoreSet::new(), &criteria, "innovation", 20);
        let result = aggregate(&scores, &criteria);
        assert_eq!(result.total, 20);
        assert_eq!(result.max, 45);
        // 20 / 45 = 44.4%
        assert_eq!(result.percentage, 44);
    }

    #[test]
    fn test_aggregate_rounds_half_up() {
        let criteria = vec![Criterion::new("a", "A", 8)];
        let scores = set_score(ScoreSet::new(), &criteria, "a", 1);
        // 12.5% rounds to 13
        assert_eq!(aggregate(&scores, &criteria).percentage, 13);
    }

    #[test]
    fn test_aggregate_zero_max_has_zero_percentage() {
        let result = aggregate(&ScoreSet::new(), &[]);
        assert_eq!(
            result,
            EvaluationResult {
                total: 0,
                max: 0,
                percentage: 0
            }
        );
    }

    #[test]
    fn test_aggregate_oversized_criteria_saturate() {
        let criteria = vec![
            Criterion::new("a", "A", u32::MAX),
            Criterion::new("b", "B", 2),
        ];
        let empty = aggregate(&ScoreSet::zeroed(&criteria), &criteria);
        assert_eq!(empty.total, 0);
        assert_eq!(empty.max, u32::MAX);
        assert_eq!(empty.percentage, 0);

        let scores = set_score(ScoreSet::new(), &criteria, "a", i64::from(u32::MAX));
        let scores = set_score(scores, &criteria, "b", 2);
        let full = aggregate(&scores, &criteria);
        assert_eq!(full.total, u32::MAX);
        assert_eq!(full.percentage, 100);
    }

    #[test]
    fn test_aggregate_ignores_foreign_ids() {
        let department = default_criteria(EvaluationType::Department);
        let central = default_criteria(EvaluationType::Central);
        let scores = set_score(ScoreSet::zeroed(&department), &department, "viva", 15);

        let result = aggregate(&scores, &central);
        assert_eq!(result.total, 0);
        assert_eq!(result.max, 100);
    }

    #[test]
    fn test_full_marks() {
        let criteria = default_criteria(EvaluationType::Department);
        let scores = criteria.iter().fold(ScoreSet::new(), |acc, c| {
            set_score(acc, &criteria, &c.id, i64::from(c.max_score))
        });
        let result = aggregate(&scores, &criteria);
        assert_eq!(result.total, 100);
        assert_eq!(result.percentage, 100);
    }

    #[test]
    fn test_breakdown_follows_criteria_order() {
        let criteria = sample_criteria();
        let scores = set_score(ScoreSet::new(), &criteria, "presentation", 15);
        let rows = breakdown(&scores, &criteria);

        let ids: Vec<_> = rows.iter().map(|r| r.criterion.id.as_str()).collect();
        assert_eq!(ids, vec!["innovation", "presentation", "documentation"]);
        assert_eq!(rows[0].band, Band::NotScored);
        assert_eq!(rows[1].band, Band::Outstanding);
    }

    #[test]
    fn test_score_set_serializes_as_map() {
        let criteria = sample_criteria();
        let scores = set_score(ScoreSet::zeroed(&criteria), &criteria, "innovation", 7);
        let json = serde_json::to_string(&scores).unwrap();
        assert_eq!(json, r#"{"documentation":0,"innovation":7,"presentation":0}"#);
    }

    proptest! {
        #[test]
        fn prop_total_never_exceeds_max(
            maxes in proptest::collection::vec(1u32..=50, 0..10),
            raws in proptest::collection::vec(-100i64..=200, 0..10),
        ) {
            let criteria: Vec<Criterion> = maxes
                .iter()
                .enumerate()
                .map(|(i, max)| Criterion::new(&format!("c{}", i), "C", *max))
                .collect();
            let scores = criteria
                .iter()
                .zip(raws.iter())
                .fold(ScoreSet::new(), |acc, (c, raw)| set_score(acc, &criteria, &c.id, *raw));

            let result = aggregate(&scores, &criteria);
            prop_assert!(result.total <= result.max);
            prop_assert!(result.percentage <= 100);
        }
    }
}
