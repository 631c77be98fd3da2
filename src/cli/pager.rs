use std::io::{BufRead, Write};

use crate::cli::console::Console;
use crate::error::Result;
use crate::models::{TripRecord, TripSchema, TripTable};
use crate::utils::constants::PAGE_SIZE;

pub const FIRST_PAGE_PROMPT: &str =
    "\nWould you like to see the first 5 rows of raw data? Enter yes or no.\n";
pub const NEXT_PAGE_PROMPT: &str =
    "\nWould you like to see the next 5 rows of raw data? Enter yes or no.\n";
pub const END_OF_DATA: &str = "You've reached the end of the data.";

/// A block of consecutive rows starting at table position `offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Page<'a> {
    pub offset: usize,
    pub rows: &'a [TripRecord],
}

/// Walks a trip table `PAGE_SIZE` rows at a time.
pub struct RawDataPager<'a> {
    table: &'a TripTable,
    cursor: usize,
}

impl<'a> RawDataPager<'a> {
    pub fn new(table: &'a TripTable) -> Self {
        Self { table, cursor: 0 }
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.table.len()
    }

    /// Next unseen rows, advancing the cursor. `None` once every row was shown.
    pub fn next_page(&mut self) -> Option<Page<'a>> {
        if self.is_exhausted() {
            return None;
        }

        let offset = self.cursor;
        let rows = self.table.rows(offset..offset + PAGE_SIZE);
        self.cursor += rows.len();

        Some(Page { offset, rows })
    }

    /// Interactive loop: show pages while the user answers "yes".
    pub fn run<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<()> {
        let mut wants_more = console.confirm(FIRST_PAGE_PROMPT)?;

        while wants_more {
            if let Some(page) = self.next_page() {
                console.println(&format_page(&page, self.table.schema()))?;
            }

            if self.is_exhausted() {
                console.println(END_OF_DATA)?;
                break;
            }

            wants_more = console.confirm(NEXT_PAGE_PROMPT)?;
        }

        Ok(())
    }
}

fn format_page(page: &Page<'_>, schema: TripSchema) -> String {
    let mut header = vec![
        "", "Start Time", "End Time", "Trip Duration", "Start Station", "End Station", "User Type",
    ];
    if schema.has_gender {
        header.push("Gender");
    }
    if schema.has_birth_year {
        header.push("Birth Year");
    }

    let mut lines = vec![header.join(" | ")];
    for (i, record) in page.rows.iter().enumerate() {
        lines.push(format_row(page.offset + i, record, schema));
    }
    lines.join("\n")
}

fn format_row(index: usize, record: &TripRecord, schema: TripSchema) -> String {
    let mut cells = vec![
        index.to_string(),
        record.start_time.to_string(),
        record
            .end_time
            .map_or_else(|| "NaN".to_string(), |t| t.to_string()),
        record
            .trip_duration
            .map_or_else(|| "NaN".to_string(), |d| d.to_string()),
        record.start_station.clone(),
        record.end_station.clone(),
        record.user_type.clone().unwrap_or_else(|| "NaN".to_string()),
    ];
    if schema.has_gender {
        cells.push(record.gender.clone().unwrap_or_else(|| "NaN".to_string()));
    }
    if schema.has_birth_year {
        cells.push(
            record
                .birth_year
                .map_or_else(|| "NaN".to_string(), |y| y.to_string()),
        );
    }
    cells.join(" | ")
}
