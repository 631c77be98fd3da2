use crate::analyzers::reductions::{mean, sum};
use crate::error::{BikeshareError, Result};
use crate::models::TripTable;

#[derive(Debug, Clone, PartialEq)]
pub struct DurationStatistics {
    pub total_seconds: f64,
    /// `None` when no selected trip has a duration
    pub mean_seconds: Option<f64>,
    /// Trips with a recorded duration
    pub trip_count: usize,
}

pub struct DurationAnalyzer;

impl DurationAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, table: &TripTable) -> Result<DurationStatistics> {
        if table.is_empty() {
            return Err(BikeshareError::EmptyFilterResult(
                "trip duration".to_string(),
            ));
        }

        let durations = || table.iter().filter_map(|r| r.trip_duration);
        let trip_count = durations().count();

        let mean_seconds = if trip_count == 0 {
            None
        } else {
            Some(mean(durations(), "mean trip duration")?)
        };

        Ok(DurationStatistics {
            total_seconds: sum(durations()),
            mean_seconds,
            trip_count,
        })
    }
}

impl DurationStatistics {
    pub fn summary(&self) -> String {
        let average = match self.mean_seconds {
            Some(mean) => format!("{} seconds ({})", mean, format_hms(mean)),
            None => "not recorded".to_string(),
        };

        format!(
            "Total travel time: {} seconds ({})\n\
            Average travel time: {}",
            self.total_seconds,
            format_hms(self.total_seconds),
            average
        )
    }
}

/// Whole seconds as `[Nd ]HH:MM:SS`
fn format_hms(seconds: f64) -> String {
    let total = seconds.max(0.0).round() as u64;
    let (days, rem) = (total / 86_400, total % 86_400);
    let (hours, rem) = (rem / 3600, rem % 3600);
    let (minutes, secs) = (rem / 60, rem % 60);

    if days > 0 {
        format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, secs)
    } else {
        format!("{:02}:{:02}:{:02}", hours, minutes, secs)
    }
}

impl Default for DurationAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{City, TripRecord, TripSchema};
    use chrono::NaiveDate;

    fn trip(duration: f64) -> TripRecord {
        let at = NaiveDate::from_ymd_opt(2017, 2, 10)
            .unwrap()
            .and_hms_opt(7, 45, 0)
            .unwrap();
        TripRecord::new(
            at,
            at + chrono::Duration::seconds(duration as i64),
            duration,
            "A".to_string(),
            "B".to_string(),
            None,
        )
    }

    #[test]
    fn test_sum_and_mean() -> Result<()> {
        let table = TripTable::new(
            City::Washington,
            TripSchema::without_demographics(),
            vec![trip(100.0), trip(200.0), trip(300.0)],
        );

        let stats = DurationAnalyzer::new().analyze(&table)?;

        assert_eq!(stats.total_seconds, 600.0);
        assert_eq!(stats.mean_seconds, Some(200.0));
        assert_eq!(stats.trip_count, 3);
        assert_eq!(
            stats.summary(),
            "Total travel time: 600 seconds (00:10:00)\nAverage travel time: 200 seconds (00:03:20)"
        );
        Ok(())
    }

    #[test]
    fn test_missing_durations_are_skipped() -> Result<()> {
        let mut blank = trip(0.0);
        blank.trip_duration = None;
        let table = TripTable::new(
            City::Chicago,
            TripSchema::with_demographics(),
            vec![trip(100.0), blank.clone(), trip(300.0)],
        );

        let stats = DurationAnalyzer::new().analyze(&table)?;
        assert_eq!(stats.total_seconds, 400.0);
        assert_eq!(stats.mean_seconds, Some(200.0));
        assert_eq!(stats.trip_count, 2);

        let only_blank = TripTable::new(City::Chicago, TripSchema::default(), vec![blank]);
        let stats = DurationAnalyzer::new().analyze(&only_blank)?;
        assert_eq!(stats.total_seconds, 0.0);
        assert_eq!(stats.mean_seconds, None);
        assert!(stats.summary().ends_with("Average travel time: not recorded"));
        Ok(())
    }

    #[test]
    fn test_format_hms() {
        assert_eq!(format_hms(0.0), "00:00:00");
        assert_eq!(format_hms(3_661.4), "01:01:01");
        assert_eq!(format_hms(90_061.0), "1d 01:01:01");
    }

    #[test]
    fn test_empty_table_is_error() {
        let table = TripTable::new(City::Washington, TripSchema::default(), Vec::new());
        assert!(DurationAnalyzer::new().analyze(&table).is_err());
    }
}
