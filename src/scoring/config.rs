use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which jury is scoring the project.
///
/// Department juries and the central jury score against different criteria,
/// so switching between them replaces the whole score set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EvaluationType {
    Department,
    Central,
}

impl EvaluationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EvaluationType::Department => "department",
            EvaluationType::Central => "central",
        }
    }
}

impl fmt::Display for EvaluationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EvaluationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "department" | "dept" => Ok(EvaluationType::Department),
            "central" => Ok(EvaluationType::Central),
            other => Err(format!(
                "unknown evaluation type '{}' (expected 'department' or 'central')",
                other
            )),
        }
    }
}

/// A named scoring dimension with a maximum point value.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Criterion {
    pub id: String,
    pub name: String,
    pub max_score: u32,
}

impl Criterion {
    pub fn new(id: &str, name: &str, max_score: u32) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            max_score,
        }
    }
}

/// Per-jury criteria overrides.
///
/// Each list is optional; a missing list falls back to the built-in criteria
/// for that evaluation type.
///
/// Example YAML:
/// ```yaml
/// criteria:
///   department:
///     - { id: innovation, name: Innovation, max_score: 20 }
///     - { id: implementation, name: Implementation, max_score: 30 }
///   central:
///     - { id: impact, name: Practical Impact, max_score: 50 }
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CriteriaConfig {
    #[serde(default)]
    pub department: Option<Vec<Criterion>>,

    #[serde(default)]
    pub central: Option<Vec<Criterion>>,
}

impl CriteriaConfig {
    /// Criteria in effect for `evaluation_type`, overrides first.
    pub fn criteria_for(&self, evaluation_type: EvaluationType) -> Vec<Criterion> {
        let configured = match evaluation_type {
            EvaluationType::Department => self.department.as_ref(),
            EvaluationType::Central => self.central.as_ref(),
        };
        configured
            .cloned()
            .unwrap_or_else(|| default_criteria(evaluation_type))
    }
}

/// Built-in criteria. Both juries total 100 points.
pub fn default_criteria(evaluation_type: EvaluationType) -> Vec<Criterion> {
    match evaluation_type {
        EvaluationType::Department => vec![
            Criterion::new("innovation", "Innovation", 20),
            Criterion::new("technical", "Technical Complexity", 20),
            Criterion::new("implementation", "Implementation", 20),
            Criterion::new("presentation", "Presentation", 15),
            Criterion::new("documentation", "Documentation", 10),
            Criterion::new("viva", "Q&A / Viva", 15),
        ],
        EvaluationType::Central => vec![
            Criterion::new("innovation", "Innovation & Originality", 25),
            Criterion::new("technical", "Technical Depth", 25),
            Criterion::new("impact", "Practical Impact", 20),
            Criterion::new("presentation", "Presentation", 15),
            Criterion::new("teamwork", "Team Coordination", 15),
        ],
    }
}
