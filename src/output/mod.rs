pub mod formatter;

pub use formatter::{
    format_band, format_breakdown, format_criteria, format_feedback, format_result,
    format_timeline, should_use_colors,
};
