use super::config::{CriteriaConfig, Criterion};
use std::collections::HashSet;

/// Largest points a single criterion may be worth.
pub const MAX_CRITERION_SCORE: u32 = 1000;

/// Validate criteria overrides at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_criteria(config: &CriteriaConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(ref department) = config.department {
        check_list("criteria.department", department, &mut errors);
    }
    if let Some(ref central) = config.central {
        check_list("criteria.central", central, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_list(path: &str, criteria: &[Criterion], errors: &mut Vec<String>) {
    if criteria.is_empty() {
        errors.push(format!("{}: must list at least one criterion", path));
        return;
    }

    let mut seen = HashSet::new();
    for (i, criterion) in criteria.iter().enumerate() {
        let id = criterion.id.trim();
        if id.is_empty() {
            errors.push(format!("{}[{}].id: must not be blank", path, i));
        } else if !seen.insert(id) {
            errors.push(format!("{}[{}].id: duplicate id '{}'", path, i, id));
        }
        if criterion.max_score == 0 {
            errors.push(format!(
                "{}[{}].max_score: must be positive for '{}'",
                path, i, criterion.id
            ));
        } else if criterion.max_score > MAX_CRITERION_SCORE {
            errors.push(format!(
                "{}[{}].max_score: must be at most {} for '{}'",
                path, i, MAX_CRITERION_SCORE, criterion.id
            ));
        }
    }
}
