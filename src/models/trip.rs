use std::ops::Range;

use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::models::City;
use crate::utils::constants::{DAY_NAMES, MONTH_NAMES};

/// One trip. Blank cells in the source are `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    pub start_time: NaiveDateTime,
    pub end_time: Option<NaiveDateTime>,
    /// Seconds
    pub trip_duration: Option<f64>,
    pub start_station: String,
    pub end_station: String,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,
}

impl TripRecord {
    pub fn new(
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
        trip_duration: f64,
        start_station: String,
        end_station: String,
        user_type: Option<String>,
    ) -> Self {
        Self {
            start_time,
            end_time: Some(end_time),
            trip_duration: Some(trip_duration),
            start_station,
            end_station,
            user_type,
            gender: None,
            birth_year: None,
        }
    }

    pub fn with_demographics(mut self, gender: Option<String>, birth_year: Option<i32>) -> Self {
        self.gender = gender;
        self.birth_year = birth_year;
        self
    }

    /// 1 = January
    pub fn start_month(&self) -> u32 {
        self.start_time.month()
    }

    pub fn start_month_name(&self) -> &'static str {
        MONTH_NAMES[self.start_time.month0() as usize]
    }

    pub fn start_day_name(&self) -> &'static str {
        DAY_NAMES[self.start_time.weekday().num_days_from_monday() as usize]
    }

    pub fn start_hour(&self) -> u32 {
        self.start_time.hour()
    }

    /// Route label, e.g. "Canal St to Clark St"
    pub fn trip_label(&self) -> String {
        format!("{} to {}", self.start_station, self.end_station)
    }
}

/// Which optional columns the source file carried.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TripSchema {
    pub has_gender: bool,
    pub has_birth_year: bool,
}

impl TripSchema {
    pub fn with_demographics() -> Self {
        Self {
            has_gender: true,
            has_birth_year: true,
        }
    }

    pub fn without_demographics() -> Self {
        Self::default()
    }
}

/// Trips for a single city in source file order.
#[derive(Debug, Clone, PartialEq)]
pub struct TripTable {
    city: City,
    schema: TripSchema,
    records: Vec<TripRecord>,
}

impl TripTable {
    pub fn new(city: City, schema: TripSchema, records: Vec<TripRecord>) -> Self {
        Self {
            city,
            schema,
            records,
        }
    }

    pub fn city(&self) -> City {
        self.city
    }

    pub fn schema(&self) -> TripSchema {
        self.schema
    }

    pub fn records(&self) -> &[TripRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TripRecord> {
        self.records.iter()
    }

    /// Rows in `range`, clamped to the table length.
    pub fn rows(&self, range: Range<usize>) -> &[TripRecord] {
        let end = range.end.min(self.records.len());
        let start = range.start.min(end);
        &self.records[start..end]
    }

    /// New table with the same city and schema holding only matching rows.
    pub fn retain_matching<F>(&self, predicate: F) -> TripTable
    where
        F: Fn(&TripRecord) -> bool,
    {
        let records = self
            .records
            .iter()
            .filter(|r| predicate(r))
            .cloned()
            .collect();

        TripTable::new(self.city, self.schema, records)
    }
}
