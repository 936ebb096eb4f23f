use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::hours::WorkingWindow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayState {
    Open,
    Closed,
    Past,
}

/// One cell of the date picker's month grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub state: DayState,
    /// Working window of an open day
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window: Option<WorkingWindow>,
}
