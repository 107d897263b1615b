use serde::{Deserialize, Serialize};

use super::parse::{try_parse_range, DEFAULT_BLOCK_MINUTES};
use super::types::ScheduleEvent;

pub const DEFAULT_DAY_START_HOUR: u32 = 8;
pub const DEFAULT_DAY_END_HOUR: u32 = 18;

/// Slack allowed past either edge of the window before a box counts as
/// overflowing. Covers floating point error only; events that genuinely run
/// past the window end are reported by [`LayoutBox::overflows`].
pub const DAY_BOUNDARY_TOLERANCE: f64 = 1e-9;

/// The visible span of the timeline, in whole hours of a 24h clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DayWindow {
    #[serde(rename = "day_start_hour", default = "default_start_hour")]
    pub start_hour: u32,
    #[serde(rename = "day_end_hour", default = "default_end_hour")]
    pub end_hour: u32,
}

fn default_start_hour() -> u32 {
    DEFAULT_DAY_START_HOUR
}

fn default_end_hour() -> u32 {
    DEFAULT_DAY_END_HOUR
}

impl Default for DayWindow {
    fn default() -> Self {
        Self {
            start_hour: DEFAULT_DAY_START_HOUR,
            end_hour: DEFAULT_DAY_END_HOUR,
        }
    }
}

impl DayWindow {
    /// Build a window, substituting the default 8:00–18:00 window when
    /// `end_hour` is not after `start_hour` or runs past midnight.
    pub fn new(start_hour: u32, end_hour: u32) -> Self {
        let window = Self {
            start_hour,
            end_hour,
        };
        if window.is_valid() {
            window
        } else {
            tracing::warn!(start_hour, end_hour, "invalid day window, using default");
            Self::default()
        }
    }

    pub fn is_valid(&self) -> bool {
        self.start_hour < self.end_hour && self.end_hour <= 24
    }

    pub fn start_minutes(&self) -> u32 {
        self.start_hour * 60
    }

    pub fn span_minutes(&self) -> u32 {
        self.end_hour.saturating_sub(self.start_hour) * 60
    }

    /// Each whole hour in the window with its fractional position,
    /// both edges included.
    pub fn hour_ticks(&self) -> Vec<(u32, f64)> {
        let span = f64::from(self.end_hour.saturating_sub(self.start_hour));
        (self.start_hour..=self.end_hour)
            .map(|hour| {
                let position = if span > 0.0 {
                    f64::from(hour - self.start_hour) / span
                } else {
                    0.0
                };
                (hour, position)
            })
            .collect()
    }
}

/// Horizontal placement of one event, as fractions of the day window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutBox {
    pub start_fraction: f64,
    pub width_fraction: f64,
    pub row: usize,
    /// Minutes since midnight the box was placed from.
    pub start_minutes: u32,
    pub end_minutes: u32,
    /// The time range did not parse and the default block was used.
    pub defaulted: bool,
}

impl LayoutBox {
    pub fn end_fraction(&self) -> f64 {
        self.start_fraction + self.width_fraction
    }

    pub fn starts_before_window(&self) -> bool {
        self.start_fraction < -DAY_BOUNDARY_TOLERANCE
    }

    pub fn ends_after_window(&self) -> bool {
        self.end_fraction() > 1.0 + DAY_BOUNDARY_TOLERANCE
    }

    /// True when the event starts before or ends after the window.
    pub fn overflows(&self) -> bool {
        self.starts_before_window() || self.ends_after_window()
    }

    /// Start and end clipped to `[0, 1]`, for renderers that cannot draw
    /// outside the window.
    pub fn clipped(&self) -> (f64, f64) {
        (
            self.start_fraction.clamp(0.0, 1.0),
            self.end_fraction().clamp(0.0, 1.0),
        )
    }
}

/// Place every event on the timeline.
///
/// Rows follow input order and overlapping events are not repacked into
/// shared lanes. Boxes are not clipped to the window. A malformed time range
/// is logged once here and placed as a one-hour block at the window start.
pub fn layout(events: &[ScheduleEvent], window: DayWindow) -> Vec<LayoutBox> {
    let window = if window.is_valid() {
        window
    } else {
        DayWindow::default()
    };
    let origin = f64::from(window.start_minutes());
    let span = f64::from(window.span_minutes());

    events
        .iter()
        .enumerate()
        .map(|(row, event)| {
            let (start, end, defaulted) = match try_parse_range(&event.time_range) {
                Ok((start, end)) => (start, end, false),
                Err(e) => {
                    tracing::warn!(
                        label = %event.label,
                        "{:#}; shown as a one-hour block",
                        e
                    );
                    let start = window.start_minutes();
                    (start, start + DEFAULT_BLOCK_MINUTES, true)
                }
            };
            let layout_box = LayoutBox {
                start_fraction: (f64::from(start) - origin) / span,
                width_fraction: f64::from(end - start) / span,
                row,
                start_minutes: start,
                end_minutes: end,
                defaulted,
            };
            if layout_box.overflows() {
                tracing::debug!(
                    label = %event.label,
                    time_range = %event.time_range,
                    "event extends past the day window"
                );
            }
            layout_box
        })
        .collect()
}
