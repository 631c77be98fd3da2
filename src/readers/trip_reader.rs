use crate::config::DataConfig;
use crate::error::{BikeshareError, Result};
use crate::models::{City, TripRecord, TripSchema, TripTable};
use crate::utils::constants::{
    COL_BIRTH_YEAR, COL_END_STATION, COL_END_TIME, COL_GENDER, COL_START_STATION, COL_START_TIME,
    COL_TRIP_DURATION, COL_USER_TYPE, TIMESTAMP_FORMATS,
};
use chrono::NaiveDateTime;
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Positions of the columns we read, resolved from the header row.
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    start_time: usize,
    end_time: Option<usize>,
    trip_duration: usize,
    start_station: usize,
    end_station: usize,
    user_type: usize,
    gender: Option<usize>,
    birth_year: Option<usize>,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord, path: &Path) -> Result<Self> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        let require = |name: &str| {
            find(name).ok_or_else(|| {
                BikeshareError::malformed(path, format!("missing required column '{}'", name))
            })
        };

        Ok(Self {
            start_time: require(COL_START_TIME)?,
            end_time: find(COL_END_TIME),
            trip_duration: require(COL_TRIP_DURATION)?,
            start_station: require(COL_START_STATION)?,
            end_station: require(COL_END_STATION)?,
            user_type: require(COL_USER_TYPE)?,
            gender: find(COL_GENDER),
            birth_year: find(COL_BIRTH_YEAR),
        })
    }

    fn schema(&self) -> TripSchema {
        TripSchema {
            has_gender: self.gender.is_some(),
            has_birth_year: self.birth_year.is_some(),
        }
    }
}

pub struct TripReader {
    config: DataConfig,
}

impl TripReader {
    pub fn new(config: DataConfig) -> Self {
        Self { config }
    }

    /// Load every trip for `city` from its configured CSV file
    pub fn load_city(&self, city: City) -> Result<TripTable> {
        let path = self.config.path_for(city);
        if !path.is_file() {
            return Err(BikeshareError::ResourceNotFound { city, path });
        }

        info!("Loading {} trips from {}", city, path.display());
        let file = File::open(&path)?;
        let table = self.read_trips(file, city, &path)?;
        debug!("Loaded {} trips for {}", table.len(), city);

        Ok(table)
    }

    /// Parse trips from any CSV source. `path` is only used in error messages.
    pub fn read_trips<R: Read>(&self, source: R, city: City, path: &Path) -> Result<TripTable> {
        let mut reader = ReaderBuilder::new().has_headers(true).from_reader(source);

        let headers = reader
            .headers()
            .map_err(|e| BikeshareError::malformed(path, e.to_string()))?
            .clone();
        let columns = ColumnIndex::from_headers(&headers, path)?;

        let mut records = Vec::new();
        for (row, result) in reader.records().enumerate() {
            let raw = result.map_err(|e| BikeshareError::malformed(path, e.to_string()))?;
            // Header is line 1
            let line = row + 2;
            records.push(parse_trip(&raw, &columns, path, line)?);
        }

        Ok(TripTable::new(city, columns.schema(), records))
    }
}

fn parse_trip(
    raw: &StringRecord,
    columns: &ColumnIndex,
    path: &Path,
    line: usize,
) -> Result<TripRecord> {
    let field = |idx: usize| raw.get(idx).unwrap_or("").trim();
    let malformed =
        |message: String| BikeshareError::malformed(path, format!("line {}: {}", line, message));

    let start_time = parse_timestamp(field(columns.start_time)).ok_or_else(|| {
        malformed(format!("invalid start time '{}'", field(columns.start_time)))
    })?;

    let end_time = match columns.end_time.map(|idx| field(idx)) {
        None | Some("") => None,
        Some(value) => Some(
            parse_timestamp(value)
                .ok_or_else(|| malformed(format!("invalid end time '{}'", value)))?,
        ),
    };

    let duration_str = field(columns.trip_duration);
    let trip_duration = parse_number(duration_str)
        .ok_or_else(|| malformed(format!("invalid trip duration '{}'", duration_str)))?;

    let record = TripRecord {
        start_time,
        end_time,
        trip_duration,
        start_station: field(columns.start_station).to_string(),
        end_station: field(columns.end_station).to_string(),
        user_type: optional_text(field(columns.user_type)),
        gender: None,
        birth_year: None,
    };

    let gender = columns.gender.and_then(|idx| optional_text(field(idx)));
    let birth_year = match columns.birth_year {
        Some(idx) => parse_birth_year(field(idx))
            .ok_or_else(|| malformed(format!("invalid birth year '{}'", field(idx))))?,
        None => None,
    };

    Ok(record.with_demographics(gender, birth_year))
}

fn optional_text(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Accepts the layouts in `TIMESTAMP_FORMATS`
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

/// `Some(None)` for a blank cell, `None` for text that is not a finite number.
fn parse_number(value: &str) -> Option<Option<f64>> {
    if value.is_empty() {
        return Some(None);
    }
    match value.parse::<f64>() {
        Ok(number) if number.is_finite() => Some(Some(number)),
        _ => None,
    }
}

/// "1989.0" and "1989" both yield 1989. Same blank/invalid convention as `parse_number`.
fn parse_birth_year(value: &str) -> Option<Option<i32>> {
    match parse_number(value)? {
        None => Some(None),
        Some(year) if (i32::MIN as f64..=i32::MAX as f64).contains(&year) => {
            Some(Some(year.trunc() as i32))
        }
        Some(_) => None,
    }
}

impl Default for TripReader {
    fn default() -> Self {
        Self::new(DataConfig::default())
    }
}
