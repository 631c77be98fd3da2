use crate::analyzers::reductions::mode;
use crate::error::{BikeshareError, Result};
use crate::models::TripTable;

#[derive(Debug, Clone, PartialEq)]
pub struct StationStatistics {
    pub most_common_start: (String, usize),
    pub most_common_end: (String, usize),
    /// "<start> to <end>"
    pub most_common_trip: (String, usize),
}

pub struct StationAnalyzer;

impl StationAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, table: &TripTable) -> Result<StationStatistics> {
        if table.is_empty() {
            return Err(BikeshareError::EmptyFilterResult(
                "popular stations".to_string(),
            ));
        }

        let (start, start_count) =
            mode(table.iter().map(|r| r.start_station.as_str()), "start station")?;
        let (end, end_count) = mode(table.iter().map(|r| r.end_station.as_str()), "end station")?;
        let most_common_trip = mode(table.iter().map(|r| r.trip_label()), "trip")?;

        Ok(StationStatistics {
            most_common_start: (start.to_string(), start_count),
            most_common_end: (end.to_string(), end_count),
            most_common_trip,
        })
    }
}

impl StationStatistics {
    pub fn summary(&self) -> String {
        format!(
            "Most common start station: {} ({} trips)\n\
            Most common end station: {} ({} trips)\n\
            Most common trip: {} ({} trips)",
            self.most_common_start.0,
            self.most_common_start.1,
            self.most_common_end.0,
            self.most_common_end.1,
            self.most_common_trip.0,
            self.most_common_trip.1
        )
    }
}

impl Default for StationAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
