use crate::analyzers::reductions::mode;
use crate::error::{BikeshareError, Result};
use crate::models::TripTable;
use crate::utils::constants::MONTH_NAMES;

#[derive(Debug, Clone, PartialEq)]
pub struct TimeStatistics {
    /// 1 = January
    pub most_common_month: u32,
    pub most_common_day: &'static str,
    pub most_common_hour: u32,
}

pub struct TimeAnalyzer;

impl TimeAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, table: &TripTable) -> Result<TimeStatistics> {
        if table.is_empty() {
            return Err(BikeshareError::EmptyFilterResult(
                "times of travel".to_string(),
            ));
        }

        let (most_common_month, _) = mode(table.iter().map(|r| r.start_month()), "month")?;
        let (most_common_day, _) = mode(table.iter().map(|r| r.start_day_name()), "day")?;
        let (most_common_hour, _) = mode(table.iter().map(|r| r.start_hour()), "hour")?;

        Ok(TimeStatistics {
            most_common_month,
            most_common_day,
            most_common_hour,
        })
    }
}

impl TimeStatistics {
    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[(self.most_common_month as usize).saturating_sub(1) % 12]
    }

    pub fn summary(&self) -> String {
        format!(
            "Most common month: {} ({})\n\
            Most common day: {}\n\
            Most common hour: {}",
            self.most_common_month,
            self.month_name(),
            self.most_common_day,
            self.most_common_hour
        )
    }
}

impl Default for TimeAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
