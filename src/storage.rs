use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs::{self, File};
use std::path::Path;

use crate::feedback::FeedbackResponse;
use crate::scoring::Submission;
use crate::timeline::Schedule;

/// Load a schedule from a YAML or JSON file, chosen by extension.
///
/// Anything that is not `.json` is read as YAML.
pub fn load_schedule(path: &Path) -> Result<Schedule> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read schedule file at {}", path.display()))?;

    let schedule: Schedule = if is_json(path) {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse schedule JSON in {}", path.display()))?
    } else {
        serde_saphyr::from_str(&content)
            .with_context(|| format!("Failed to parse schedule YAML in {}", path.display()))?
    };

    tracing::debug!(
        path = %path.display(),
        events = schedule.events.len(),
        "loaded schedule"
    );
    Ok(schedule)
}

/// Load feedback forms from a JSON array.
pub fn load_feedback(path: &Path) -> Result<Vec<FeedbackResponse>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open feedback file at {}", path.display()))?;

    let responses: Vec<FeedbackResponse> = serde_json::from_reader(file)
        .with_context(|| format!("Failed to parse feedback in {}", path.display()))?;

    tracing::debug!(path = %path.display(), responses = responses.len(), "loaded feedback");
    Ok(responses)
}

/// Save a submission payload as JSON atomically
///
/// Uses atomic-write-file so a half-written payload is never left behind.
/// Creates the parent directory if it doesn't exist.
pub fn save_submission(path: &Path, submission: &Submission) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory at {}", parent.display()))?;
        }
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, submission)
        .context("Failed to serialize submission")?;

    file.commit().context("Failed to save submission")?;

    tracing::info!(path = %path.display(), project = %submission.project_id, "saved submission");
    Ok(())
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{CriteriaConfig, EvaluationSession, EvaluationType};

    #[test]
    fn test_load_yaml_schedule() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schedule.yaml");
        fs::write(
            &path,
            "events:\n  - time_range: \"10:00 AM - 12:00 PM\"\n    label: Judging\n    location: Block A\n",
        )
        .unwrap();

        let schedule = load_schedule(&path).unwrap();
        assert_eq!(schedule.events.len(), 1);
        assert_eq!(schedule.events[0].location, "Block A");
    }

    #[test]
    fn test_load_json_schedule() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schedule.JSON");
        fs::write(&path, r#"{"events":[{"time":"02:00 PM - 04:00 PM","label":"Awards"}]}"#)
            .unwrap();

        let schedule = load_schedule(&path).unwrap();
        assert_eq!(schedule.events[0].time_range, "02:00 PM - 04:00 PM");
    }

    #[test]
    fn test_load_schedule_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_schedule(&dir.path().join("nope.yaml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read schedule file"));
    }

    #[test]
    fn test_load_feedback() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("feedback.json");
        fs::write(&path, r#"[{"answers":{"Q1":5}},{"respondent":"r2","answers":{"Q1":3,"Q2":4}}]"#)
            .unwrap();

        let responses = load_feedback(&path).unwrap();
        assert_eq!(responses.len(), 2);
        assert_eq!(responses[1].answers.len(), 2);
    }

    #[test]
    fn test_save_submission_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("PF-1.json");

        let mut session =
            EvaluationSession::start("PF-1", EvaluationType::Central, &CriteriaConfig::default());
        session.set_score("impact", 17);
        let submission = session.to_submission();

        save_submission(&path, &submission).unwrap();

        let saved: Submission =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(saved, submission);
        assert_eq!(saved.total_score, 17);
    }
}
