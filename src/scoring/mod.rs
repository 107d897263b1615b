pub mod band;
pub mod config;
pub mod engine;
pub mod session;
pub mod validation;

pub use band::{classify, Band};
pub use config::*;
pub use engine::{aggregate, breakdown, set_score, CriterionScore, EvaluationResult, ScoreSet};
pub use session::{EvaluationSession, Submission};
pub use validation::{validate_criteria, MAX_CRITERION_SCORE};
