use serde::Serialize;

use super::types::{FeedbackResponse, QuestionId, RATING_MAX, RATING_MIN};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionStat {
    pub question: QuestionId,
    pub responses: usize,
    pub average: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedbackSummary {
    pub responses: usize,
    /// Only questions with at least one answer, in question order.
    pub questions: Vec<QuestionStat>,
    /// Mean of every individual rating, 0 when nothing was answered.
    pub overall_average: f64,
    pub strongest: Option<QuestionId>,
    pub weakest: Option<QuestionId>,
}

/// Summarize feedback forms. Ratings outside 1..=5 are clamped.
pub fn analyze(responses: &[FeedbackResponse]) -> FeedbackSummary {
    let mut sums = [0u32; QuestionId::ALL.len()];
    let mut counts = [0usize; QuestionId::ALL.len()];

    for response in responses {
        for (question, rating) in &response.answers {
            let index = question.number() - 1;
            sums[index] += u32::from((*rating).clamp(RATING_MIN, RATING_MAX));
            counts[index] += 1;
        }
    }

    let questions: Vec<QuestionStat> = QuestionId::ALL
        .iter()
        .enumerate()
        .filter(|(i, _)| counts[*i] > 0)
        .map(|(i, question)| QuestionStat {
            question: *question,
            responses: counts[i],
            average: f64::from(sums[i]) / counts[i] as f64,
        })
        .collect();

    let total_answers: usize = counts.iter().sum();
    let overall_average = if total_answers > 0 {
        f64::from(sums.iter().sum::<u32>()) / total_answers as f64
    } else {
        0.0
    };

    // First question wins ties in both directions
    let mut strongest: Option<&QuestionStat> = None;
    let mut weakest: Option<&QuestionStat> = None;
    for stat in &questions {
        if strongest.map_or(true, |s| stat.average > s.average) {
            strongest = Some(stat);
        }
        if weakest.map_or(true, |w| stat.average < w.average) {
            weakest = Some(stat);
        }
    }

    FeedbackSummary {
        responses: responses.len(),
        overall_average,
        strongest: strongest.map(|s| s.question),
        weakest: weakest.map(|w| w.question),
        questions,
    }
}
