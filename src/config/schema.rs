use serde::{Deserialize, Serialize};

use crate::scoring::CriteriaConfig;
use crate::timeline::DayWindow;

/// Contents of `~/.config/fair-jury/config.yaml`. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub timeline: Option<DayWindow>,

    #[serde(default)]
    pub criteria: Option<CriteriaConfig>,
}

impl Config {
    pub fn day_window(&self) -> DayWindow {
        self.timeline.unwrap_or_default()
    }

    pub fn criteria(&self) -> CriteriaConfig {
        self.criteria.clone().unwrap_or_default()
    }
}
