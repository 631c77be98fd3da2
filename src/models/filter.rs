use crate::models::City;
use crate::utils::constants::{ALL_SELECTOR, DAY_NAMES, MONTH_NAMES};

/// Selection captured once per session iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    pub city: City,
    month: String,
    day: String,
}

impl FilterCriteria {
    pub fn new(city: City, month: &str, day: &str) -> Self {
        Self {
            city,
            month: month.to_lowercase(),
            day: day.to_lowercase(),
        }
    }

    pub fn unfiltered(city: City) -> Self {
        Self::new(city, ALL_SELECTOR, ALL_SELECTOR)
    }

    /// Lower-cased month name, or `None` for "all"
    pub fn month(&self) -> Option<&str> {
        selector(&self.month)
    }

    /// Lower-cased weekday name, or `None` for "all"
    pub fn day(&self) -> Option<&str> {
        selector(&self.day)
    }

    pub fn is_known_month(&self) -> bool {
        self.month()
            .map_or(true, |m| MONTH_NAMES.iter().any(|n| n.eq_ignore_ascii_case(m)))
    }

    pub fn is_known_day(&self) -> bool {
        self.day()
            .map_or(true, |d| DAY_NAMES.iter().any(|n| n.eq_ignore_ascii_case(d)))
    }

    pub fn describe(&self) -> String {
        format!(
            "city={}, month={}, day={}",
            self.city, self.month, self.day
        )
    }
}

fn selector(value: &str) -> Option<&str> {
    if value == ALL_SELECTOR {
        None
    } else {
        Some(value)
    }
}
