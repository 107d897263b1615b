use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

pub const RATING_MIN: u8 = 1;
pub const RATING_MAX: u8 = 5;

/// The twelve fixed questions of the visitor feedback form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum QuestionId {
    Q1,
    Q2,
    Q3,
    Q4,
    Q5,
    Q6,
    Q7,
    Q8,
    Q9,
    Q10,
    Q11,
    Q12,
}

impl QuestionId {
    pub const ALL: [QuestionId; 12] = [
        QuestionId::Q1,
        QuestionId::Q2,
        QuestionId::Q3,
        QuestionId::Q4,
        QuestionId::Q5,
        QuestionId::Q6,
        QuestionId::Q7,
        QuestionId::Q8,
        QuestionId::Q9,
        QuestionId::Q10,
        QuestionId::Q11,
        QuestionId::Q12,
    ];

    /// 1-based question number.
    pub fn number(&self) -> usize {
        *self as usize + 1
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q{}", self.number())
    }
}

impl FromStr for QuestionId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let number = s
            .strip_prefix('Q')
            .or_else(|| s.strip_prefix('q'))
            .and_then(|n| n.parse::<usize>().ok())
            .ok_or_else(|| format!("unknown question '{}'", s))?;
        number
            .checked_sub(1)
            .and_then(|i| QuestionId::ALL.get(i).copied())
            .ok_or_else(|| format!("unknown question '{}' (expected Q1..Q12)", s))
    }
}

/// One submitted feedback form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawFeedbackResponse")]
pub struct FeedbackResponse {
    pub respondent: Option<String>,
    pub answers: BTreeMap<QuestionId, u8>,
}

#[derive(Deserialize)]
struct RawFeedbackResponse {
    #[serde(default)]
    respondent: Option<String>,
    answers: BTreeMap<String, i64>,
}

impl TryFrom<RawFeedbackResponse> for FeedbackResponse {
    type Error = String;

    fn try_from(raw: RawFeedbackResponse) -> Result<Self, Self::Error> {
        let answers = raw
            .answers
            .into_iter()
            .map(|(key, rating)| Ok((key.parse::<QuestionId>()?, clamp_rating(rating))))
            .collect::<Result<BTreeMap<_, _>, String>>()?;
        Ok(Self {
            respondent: raw.respondent,
            answers,
        })
    }
}

fn clamp_rating(rating: i64) -> u8 {
    // In 1..=5 after clamping, so the cast is lossless
    rating.clamp(i64::from(RATING_MIN), i64::from(RATING_MAX)) as u8
}
