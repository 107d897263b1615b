use fair_jury::scoring::{
    aggregate, classify, default_criteria, set_score, Band, CriteriaConfig, EvaluationSession,
    EvaluationType, ScoreSet,
};
use fair_jury::timeline::{layout, parse_range, DayWindow, ScheduleEvent};

fn event(time_range: &str, label: &str) -> ScheduleEvent {
    ScheduleEvent {
        time_range: time_range.to_string(),
        label: label.to_string(),
        location: "Campus".to_string(),
        description: None,
    }
}

#[test]
fn jury_switch_resets_scores_and_max() {
    let catalogue = CriteriaConfig::default();
    let mut session = EvaluationSession::start("PF-100", EvaluationType::Department, &catalogue);
    assert_eq!(session.criteria().len(), 6);
    assert_eq!(session.result().max, 100);

    session.set_score("innovation", 20);
    session.set_score("documentation", 8);
    assert_eq!(session.result().total, 28);

    session.switch_type(EvaluationType::Central, &catalogue);
    assert_eq!(session.criteria().len(), 5);
    assert_eq!(session.result().total, 0);
    assert_eq!(session.result().max, 100);
    assert!(session.scores().iter().all(|(_, s)| s == 0));
}

#[test]
fn slider_values_are_clamped_before_aggregation() {
    let criteria = default_criteria(EvaluationType::Central);
    let scores = criteria.iter().fold(ScoreSet::new(), |acc, c| {
        set_score(acc, &criteria, &c.id, 1_000)
    });
    let result = aggregate(&scores, &criteria);
    assert_eq!(result.total, result.max);
    assert_eq!(result.percentage, 100);
}

#[test]
fn band_boundaries_for_twenty_point_criterion() {
    assert_eq!(classify(0, 20), Band::NotScored);
    assert_eq!(classify(6, 20), Band::NeedsImprovement);
    assert_eq!(classify(7, 20), Band::Satisfactory);
    assert_eq!(classify(20, 20), Band::Outstanding);
}

#[test]
fn schedule_layout_matches_day_window() {
    assert_eq!(parse_range("10:00 AM - 12:00 PM"), (600, 720));
    assert_eq!(parse_range("02:00 PM - 04:00 PM"), (840, 960));
    assert_eq!(parse_range("garbage"), (480, 540));

    let events = vec![
        event("10:00 AM - 12:00 PM", "Stall judging"),
        event("02:00 PM - 04:00 PM", "Central jury round"),
        event("garbage", "Unparsed"),
    ];
    let boxes = layout(&events, DayWindow::default());

    let expected = [(0.2, 0.2), (0.6, 0.2), (0.0, 0.1)];
    for (i, (layout_box, (start, width))) in boxes.iter().zip(expected).enumerate() {
        assert_eq!(layout_box.row, i);
        assert!((layout_box.start_fraction - start).abs() < 1e-9);
        assert!((layout_box.width_fraction - width).abs() < 1e-9);
        assert!(!layout_box.overflows());
    }
}
