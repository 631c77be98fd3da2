use crate::models::{FilterCriteria, TripRecord, TripTable};
use tracing::{debug, warn};

/// Narrows a trip table to a month and/or weekday of the start time.
pub struct TripFilter<'a> {
    month: Option<&'a str>,
    day: Option<&'a str>,
}

impl<'a> TripFilter<'a> {
    pub fn new(month: Option<&'a str>, day: Option<&'a str>) -> Self {
        Self { month, day }
    }

    pub fn from_criteria(criteria: &'a FilterCriteria) -> Self {
        if !criteria.is_known_month() {
            warn!(
                "'{}' is not a month name; no trips will match",
                criteria.month().unwrap_or_default()
            );
        }
        if !criteria.is_known_day() {
            warn!(
                "'{}' is not a weekday name; no trips will match",
                criteria.day().unwrap_or_default()
            );
        }

        Self::new(criteria.month(), criteria.day())
    }

    pub fn month_only(month: &'a str) -> Self {
        Self::new(Some(month), None)
    }

    pub fn day_only(day: &'a str) -> Self {
        Self::new(None, Some(day))
    }

    pub fn matches(&self, record: &TripRecord) -> bool {
        let month_ok = self
            .month
            .map_or(true, |m| record.start_month_name().eq_ignore_ascii_case(m));
        let day_ok = self
            .day
            .map_or(true, |d| record.start_day_name().eq_ignore_ascii_case(d));

        month_ok && day_ok
    }

    pub fn apply(&self, table: &TripTable) -> TripTable {
        if self.month.is_none() && self.day.is_none() {
            return table.clone();
        }

        let filtered = table.retain_matching(|r| self.matches(r));
        debug!(
            "Filter month={:?} day={:?} kept {} of {} trips",
            self.month,
            self.day,
            filtered.len(),
            table.len()
        );
        filtered
    }
}
