use std::io::{BufRead, Write};
use std::time::Instant;

use tracing::{debug, info};

use crate::analyzers::{DurationAnalyzer, StationAnalyzer, TimeAnalyzer, UserAnalyzer};
use crate::cli::console::Console;
use crate::cli::pager::RawDataPager;
use crate::error::Result;
use crate::models::{City, FilterCriteria, TripTable};
use crate::processors::TripFilter;
use crate::readers::TripReader;
use crate::utils::progress::ProgressReporter;

pub const GREETING: &str = "Hello! Let's explore some US bikeshare data!";
pub const CITY_PROMPT: &str = "Please select a city (chicago, new york city, washington): ";
pub const MONTH_PROMPT: &str =
    "Which month would you like to filter by? (all, january, february, ... , june): ";
pub const DAY_PROMPT: &str =
    "Which day would you like to filter by? (all, monday, tuesday, ... sunday): ";
pub const RESTART_PROMPT: &str = "\nWould you like to restart? Enter yes or no.\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Active,
    Terminated,
}

/// Prompt → load → filter → report → page → restart loop.
pub struct Session<R, W> {
    console: Console<R, W>,
    reader: TripReader,
    quiet: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(console: Console<R, W>, reader: TripReader) -> Self {
        Self {
            console,
            reader,
            quiet: false,
        }
    }

    /// Suppress the loading spinner
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn run(&mut self) -> Result<()> {
        let mut state = SessionState::Active;
        let mut iteration = 0usize;

        while state == SessionState::Active {
            iteration += 1;
            debug!("Starting session iteration {}", iteration);
            state = self.run_once()?;
        }

        info!("Session finished after {} iteration(s)", iteration);
        Ok(())
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// One pass through the pipeline; returns the state to move to.
    fn run_once(&mut self) -> Result<SessionState> {
        let Some(criteria) = self.get_filters()? else {
            return Ok(SessionState::Terminated);
        };

        let table = self.load_filtered(&criteria)?;

        if table.is_empty() {
            self.console.println(&format!(
                "\nNo trips match the selection ({}).",
                criteria.describe()
            ))?;
        } else {
            self.print_reports(&table)?;
            RawDataPager::new(&table).run(&mut self.console)?;
        }

        if self.console.confirm(RESTART_PROMPT)? {
            Ok(SessionState::Active)
        } else {
            Ok(SessionState::Terminated)
        }
    }

    /// `None` when input ends before all three answers were given.
    fn get_filters(&mut self) -> Result<Option<FilterCriteria>> {
        self.console.println(GREETING)?;

        let Some(city) = self.prompt_city()? else {
            return Ok(None);
        };
        let Some(month) = self.console.prompt(MONTH_PROMPT)? else {
            return Ok(None);
        };
        let Some(day) = self.console.prompt(DAY_PROMPT)? else {
            return Ok(None);
        };

        self.console.separator()?;
        Ok(Some(FilterCriteria::new(city, &month, &day)))
    }

    fn prompt_city(&mut self) -> Result<Option<City>> {
        loop {
            match self.console.prompt(CITY_PROMPT)? {
                None => return Ok(None),
                Some(answer) => {
                    if let Some(city) = City::parse(&answer) {
                        return Ok(Some(city));
                    }
                    debug!("Rejected city input '{}'", answer);
                }
            }
        }
    }

    fn load_filtered(&self, criteria: &FilterCriteria) -> Result<TripTable> {
        let progress = ProgressReporter::new_spinner(
            &format!("Loading {} trip data...", criteria.city),
            self.quiet,
        );

        let table = self.reader.load_city(criteria.city)?;
        let filtered = TripFilter::from_criteria(criteria).apply(&table);

        progress.finish_and_clear();
        info!(
            "{} of {} trips selected ({})",
            filtered.len(),
            table.len(),
            criteria.describe()
        );
        Ok(filtered)
    }

    fn print_reports(&mut self, table: &TripTable) -> Result<()> {
        self.timed_report("Calculating The Most Frequent Times of Travel...", || {
            Ok(TimeAnalyzer::new().analyze(table)?.summary())
        })?;
        self.timed_report("Calculating The Most Popular Stations and Trip...", || {
            Ok(StationAnalyzer::new().analyze(table)?.summary())
        })?;
        self.timed_report("Calculating Trip Duration...", || {
            Ok(DurationAnalyzer::new().analyze(table)?.summary())
        })?;
        self.timed_report("Calculating User Stats...", || {
            Ok(UserAnalyzer::new().analyze(table)?.summary())
        })
    }

    fn timed_report<F>(&mut self, heading: &str, compute: F) -> Result<()>
    where
        F: FnOnce() -> Result<String>,
    {
        self.console.println(&format!("\n{}\n", heading))?;
        let started = Instant::now();
        let summary = compute()?;
        let elapsed = started.elapsed();

        self.console.println(&summary)?;
        self.console
            .println(&format!("\nThis took {:.6} seconds.", elapsed.as_secs_f64()))?;
        self.console.separator()
    }
}
