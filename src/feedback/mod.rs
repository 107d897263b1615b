pub mod analysis;
pub mod types;

pub use analysis::{analyze, FeedbackSummary, QuestionStat};
pub use types::{FeedbackResponse, QuestionId, RATING_MAX, RATING_MIN};
