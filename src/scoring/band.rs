use serde::Serialize;
use std::fmt;

/// Qualitative label for a single criterion score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Band {
    NotScored,
    NeedsImprovement,
    Satisfactory,
    Excellent,
    Outstanding,
}

impl Band {
    pub fn label(&self) -> &'static str {
        match self {
            Band::NotScored => "Not Scored",
            Band::NeedsImprovement => "Needs Improvement",
            Band::Satisfactory => "Satisfactory",
            Band::Excellent => "Excellent",
            Band::Outstanding => "Outstanding",
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify `score` against `max_score`.
///
/// Boundaries belong to the lower band: exactly 30% of max is
/// `NeedsImprovement`, exactly 70% is `Satisfactory`. Comparisons are done in
/// integer tenths so that e.g. 6/20 never drifts across the 30% line.
/// Scores above max are treated as max.
pub fn classify(score: u32, max_score: u32) -> Band {
    if max_score == 0 || score == 0 {
        return Band::NotScored;
    }
    if score >= max_score {
        return Band::Outstanding;
    }

    let tenths = u64::from(score) * 10;
    let max = u64::from(max_score);
    if tenths > max * 7 {
        Band::Excellent
    } else if tenths > max * 3 {
        Band::Satisfactory
    } else {
        Band::NeedsImprovement
    }
}
