pub mod layout;
pub mod parse;
pub mod types;

pub use layout::{layout, DayWindow, LayoutBox, DAY_BOUNDARY_TOLERANCE};
pub use parse::{format_minutes, parse_range, parse_range_or, try_parse_range, DEFAULT_BLOCK_MINUTES};
pub use types::{Schedule, ScheduleEvent};
