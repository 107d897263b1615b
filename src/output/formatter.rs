use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::feedback::FeedbackSummary;
use crate::scoring::{Band, Criterion, EvaluationResult, EvaluationSession};
use crate::timeline::{format_minutes, DayWindow, LayoutBox, ScheduleEvent};

/// Bar area width when stdout is not a terminal.
const DEFAULT_TIMELINE_WIDTH: usize = 60;
const LABEL_WIDTH: usize = 24;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate text to fit available width, accounting for Unicode
fn truncate(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_width {
        text.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Band label, colored by how good it is.
pub fn format_band(band: Band, use_colors: bool) -> String {
    if !use_colors {
        return band.label().to_string();
    }
    match band {
        Band::NotScored => band.label().dimmed().to_string(),
        Band::NeedsImprovement => band.label().red().to_string(),
        Band::Satisfactory => band.label().yellow().to_string(),
        Band::Excellent => band.label().green().to_string(),
        Band::Outstanding => band.label().green().bold().to_string(),
    }
}

/// Format the criteria of one jury as "id  name  (max N)" lines.
pub fn format_criteria(criteria: &[Criterion]) -> String {
    if criteria.is_empty() {
        return "No criteria configured.".to_string();
    }
    let id_width = criteria.iter().map(|c| c.id.chars().count()).max().unwrap_or(0);
    criteria
        .iter()
        .map(|c| {
            format!(
                "{:<id_width$}  {}  (max {})",
                c.id,
                c.name,
                c.max_score,
                id_width = id_width
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One-line total, e.g. "Total: 48/100 (48%)".
pub fn format_result(result: &EvaluationResult, use_colors: bool) -> String {
    let percent = format!("{}%", result.percentage);
    if use_colors {
        format!("Total: {}/{} ({})", result.total, result.max, percent.bold())
    } else {
        format!("Total: {}/{} ({})", result.total, result.max, percent)
    }
}

/// Per-criterion table for a session followed by the total.
pub fn format_breakdown(session: &EvaluationSession, use_colors: bool) -> String {
    let header = format!(
        "Project {} ({} jury)",
        session.project_id(),
        session.evaluation_type()
    );
    let mut lines = vec![if use_colors {
        header.bold().to_string()
    } else {
        header
    }];

    for row in session.breakdown() {
        let score = format!("{}/{}", row.score, row.criterion.max_score);
        lines.push(format!(
            "  {:<width$}  {:>7}  {}",
            truncate(&row.criterion.name, LABEL_WIDTH),
            score,
            format_band(row.band, use_colors),
            width = LABEL_WIDTH
        ));
    }

    lines.push(format_result(&session.result(), use_colors));
    if !session.comments().is_empty() {
        lines.push(format!("Comments: {}", session.comments()));
    }
    lines.join("\n")
}

/// Render events as horizontal bars under an hour ruler.
///
/// `boxes` must come from `layout(events, window)`. Bars are clipped to the
/// window; an event starting before it is marked with `<`, one running past
/// it with `>`.
pub fn format_timeline(
    events: &[ScheduleEvent],
    boxes: &[LayoutBox],
    window: DayWindow,
    use_colors: bool,
) -> String {
    if events.is_empty() {
        return "No events scheduled.".to_string();
    }

    let bar_width = get_terminal_width()
        .map(|w| w.saturating_sub(LABEL_WIDTH + 2 + 20))
        .filter(|w| *w >= 20)
        .unwrap_or(DEFAULT_TIMELINE_WIDTH);

    let mut lines = vec![format_ruler(window, bar_width)];

    for (event, layout_box) in events.iter().zip(boxes) {
        let (start, end) = layout_box.clipped();
        let start_col = (start * bar_width as f64).round() as usize;
        let end_col = ((end * bar_width as f64).round() as usize)
            .max(start_col + 1)
            .min(bar_width);
        let start_col = start_col.min(end_col.saturating_sub(1));

        let bar = "█".repeat(end_col - start_col);
        let before = if layout_box.starts_before_window() { "<" } else { " " };
        let after = if layout_box.ends_after_window() { ">" } else { " " };
        let padding = " ".repeat(start_col);
        let trailing = " ".repeat(bar_width - end_col);

        let when = format!(
            "{}-{}",
            format_minutes(layout_box.start_minutes),
            format_minutes(layout_box.end_minutes)
        );
        let label = truncate(&event.label, LABEL_WIDTH);

        if use_colors {
            lines.push(format!(
                "{:<width$} {}{}{}{}{} {}",
                label,
                before.red(),
                padding,
                bar.cyan(),
                trailing,
                after.red(),
                when.dimmed(),
                width = LABEL_WIDTH
            ));
        } else {
            lines.push(format!(
                "{:<width$} {}{}{}{}{} {}",
                label,
                before,
                padding,
                bar,
                trailing,
                after,
                when,
                width = LABEL_WIDTH
            ));
        }
    }

    lines.join("\n")
}

/// Hour numbers placed at their tick positions, 24h clock.
fn format_ruler(window: DayWindow, bar_width: usize) -> String {
    let mut ruler = vec![' '; bar_width + 2];
    for (hour, position) in window.hour_ticks() {
        let col = (position * bar_width as f64).round() as usize;
        let text = hour.to_string();
        let col = col.min(ruler.len().saturating_sub(text.len()));
        for (offset, c) in text.chars().enumerate() {
            ruler[col + offset] = c;
        }
    }
    // Label column, separator and the `<` marker column
    format!(
        "{:<width$}   {}",
        "",
        ruler.into_iter().collect::<String>().trim_end(),
        width = LABEL_WIDTH
    )
}

/// Per-question averages plus the overall rating.
pub fn format_feedback(summary: &FeedbackSummary, use_colors: bool) -> String {
    if summary.responses == 0 {
        return "No feedback responses.".to_string();
    }

    let mut lines = vec![format!(
        "{} responses, overall {:.2}/5",
        summary.responses, summary.overall_average
    )];
    for stat in &summary.questions {
        let marker = if Some(stat.question) == summary.strongest {
            "  (strongest)"
        } else if Some(stat.question) == summary.weakest {
            "  (weakest)"
        } else {
            ""
        };
        let line = format!(
            "  {:<4} {:.2}  ({} answers){}",
            stat.question.to_string(),
            stat.average,
            stat.responses,
            marker
        );
        if use_colors && Some(stat.question) == summary.weakest {
            lines.push(line.red().to_string());
        } else {
            lines.push(line);
        }
    }
    lines.join("\n")
}
