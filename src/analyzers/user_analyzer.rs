use crate::analyzers::reductions::{maximum, minimum, mode, value_counts};
use crate::error::{BikeshareError, Result};
use crate::models::TripTable;

pub const DEMOGRAPHICS_UNAVAILABLE: &str = "Gender and birth year information not available.";

#[derive(Debug, Clone, PartialEq)]
pub struct UserStatistics {
    pub user_types: Vec<(String, usize)>,
    /// `None` when the city's data has no gender column
    pub gender_counts: Option<Vec<(String, usize)>>,
    pub birth_years: BirthYears,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BirthYears {
    /// No birth year column for this city
    Unavailable,
    /// Column present, every selected cell blank
    NotRecorded,
    Recorded(BirthYearStats),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: i32,
}

pub struct UserAnalyzer;

impl UserAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, table: &TripTable) -> Result<UserStatistics> {
        if table.is_empty() {
            return Err(BikeshareError::EmptyFilterResult("user stats".to_string()));
        }

        let schema = table.schema();

        let user_types = owned(value_counts(
            table.iter().filter_map(|r| r.user_type.as_deref()),
        ));

        let gender_counts = if schema.has_gender {
            Some(owned(value_counts(
                table.iter().filter_map(|r| r.gender.as_deref()),
            )))
        } else {
            None
        };

        let birth_years = if schema.has_birth_year {
            self.birth_year_stats(table)?
        } else {
            BirthYears::Unavailable
        };

        Ok(UserStatistics {
            user_types,
            gender_counts,
            birth_years,
        })
    }

    fn birth_year_stats(&self, table: &TripTable) -> Result<BirthYears> {
        let years = || table.iter().filter_map(|r| r.birth_year);
        if years().next().is_none() {
            return Ok(BirthYears::NotRecorded);
        }

        Ok(BirthYears::Recorded(BirthYearStats {
            earliest: minimum(years(), "earliest birth year")?,
            most_recent: maximum(years(), "most recent birth year")?,
            most_common: mode(years(), "most common birth year")?.0,
        }))
    }
}

fn owned(counts: Vec<(&str, usize)>) -> Vec<(String, usize)> {
    counts
        .into_iter()
        .map(|(value, count)| (value.to_string(), count))
        .collect()
}

impl UserStatistics {
    pub fn has_demographics(&self) -> bool {
        self.gender_counts.is_some() || self.birth_years != BirthYears::Unavailable
    }

    pub fn summary(&self) -> String {
        let mut lines = vec!["User types:".to_string()];
        lines.extend(count_lines(&self.user_types));

        if !self.has_demographics() {
            lines.push(DEMOGRAPHICS_UNAVAILABLE.to_string());
            return lines.join("\n");
        }

        match &self.gender_counts {
            Some(counts) => {
                lines.push("Gender counts:".to_string());
                lines.extend(count_lines(counts));
            }
            None => lines.push("Gender information not available.".to_string()),
        }

        match &self.birth_years {
            BirthYears::Recorded(stats) => {
                lines.push(format!("Earliest year of birth: {}", stats.earliest));
                lines.push(format!("Most recent year of birth: {}", stats.most_recent));
                lines.push(format!("Most common year of birth: {}", stats.most_common));
            }
            BirthYears::NotRecorded => {
                lines.push("Year of birth: not recorded for these trips".to_string());
            }
            BirthYears::Unavailable => {
                lines.push("Birth year information not available.".to_string());
            }
        }

        lines.join("\n")
    }
}

fn count_lines(counts: &[(String, usize)]) -> Vec<String> {
    if counts.is_empty() {
        return vec!["  (none recorded)".to_string()];
    }
    counts
        .iter()
        .map(|(value, count)| format!("  {}: {}", value, count))
        .collect()
}

impl Default for UserAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
