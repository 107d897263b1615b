use super::config::{CriteriaConfig, Criterion, EvaluationType};
use super::engine::{self, CriterionScore, EvaluationResult, ScoreSet};
use serde::{Deserialize, Serialize};

/// One jury member's in-progress evaluation of a single project.
///
/// Created on "start evaluation" and dropped on cancel or submit; nothing
/// here outlives the caller that owns it.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationSession {
    project_id: String,
    evaluation_type: EvaluationType,
    criteria: Vec<Criterion>,
    scores: ScoreSet,
    comments: String,
}

/// Body accepted by the evaluation submission endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub project_id: String,
    pub scores: ScoreSet,
    pub total_score: u32,
    pub percentage_score: u32,
    pub comments: String,
    pub jury_type: EvaluationType,
}

impl EvaluationSession {
    pub fn start(
        project_id: impl Into<String>,
        evaluation_type: EvaluationType,
        catalogue: &CriteriaConfig,
    ) -> Self {
        let criteria = catalogue.criteria_for(evaluation_type);
        Self {
            project_id: project_id.into(),
            evaluation_type,
            scores: ScoreSet::zeroed(&criteria),
            criteria,
            comments: String::new(),
        }
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn evaluation_type(&self) -> EvaluationType {
        self.evaluation_type
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    pub fn scores(&self) -> &ScoreSet {
        &self.scores
    }

    pub fn comments(&self) -> &str {
        &self.comments
    }

    pub fn set_comments(&mut self, comments: impl Into<String>) {
        self.comments = comments.into();
    }

    pub fn set_score(&mut self, criterion_id: &str, raw_value: i64) {
        let scores = std::mem::take(&mut self.scores);
        self.scores = engine::set_score(scores, &self.criteria, criterion_id, raw_value);
    }

    /// Switch jury. All scores are discarded, even for criteria both juries
    /// share an id for.
    pub fn switch_type(&mut self, evaluation_type: EvaluationType, catalogue: &CriteriaConfig) {
        if evaluation_type != self.evaluation_type {
            tracing::info!(
                project = %self.project_id,
                from = %self.evaluation_type,
                to = %evaluation_type,
                "switching evaluation type, scores reset"
            );
        }
        self.evaluation_type = evaluation_type;
        self.criteria = catalogue.criteria_for(evaluation_type);
        self.scores = ScoreSet::zeroed(&self.criteria);
    }

    pub fn result(&self) -> EvaluationResult {
        engine::aggregate(&self.scores, &self.criteria)
    }

    pub fn breakdown(&self) -> Vec<CriterionScore> {
        engine::breakdown(&self.scores, &self.criteria)
    }

    pub fn to_submission(&self) -> Submission {
        let result = self.result();
        Submission {
            project_id: self.project_id.clone(),
            scores: self.scores.clone(),
            total_score: result.total,
            percentage_score: result.percentage,
            comments: self.comments.clone(),
            jury_type: self.evaluation_type,
        }
    }
}
