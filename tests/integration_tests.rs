use bikeshare_explorer::analyzers::{DurationAnalyzer, StationAnalyzer, UserAnalyzer};
use bikeshare_explorer::cli::pager::{END_OF_DATA, NEXT_PAGE_PROMPT};
use bikeshare_explorer::cli::session::{CITY_PROMPT, RESTART_PROMPT};
use bikeshare_explorer::cli::{Console, Session};
use bikeshare_explorer::config::DataConfig;
use bikeshare_explorer::models::{City, FilterCriteria};
use bikeshare_explorer::processors::TripFilter;
use bikeshare_explorer::readers::TripReader;
use bikeshare_explorer::BikeshareError;
use pretty_assertions::assert_eq;
use std::io::Cursor;
use tempfile::TempDir;

const HEADER: &str =
    ",Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year";

/// Twelve trips, one per month of 2017, all on the 1st at 08:00
fn chicago_csv() -> String {
    let mut csv = String::from(HEADER);
    csv.push('\n');
    for month in 1..=12 {
        csv.push_str(&format!(
            "{idx},2017-{m:02}-01 08:00:00,2017-{m:02}-01 08:10:00,{dur},Clark St,Lake St,{ut},{g},{by}\n",
            idx = month,
            m = month,
            dur = month * 100,
            ut = if month % 3 == 0 { "Customer" } else { "Subscriber" },
            g = if month % 2 == 0 { "Female" } else { "Male" },
            by = 1970 + month,
        ));
    }
    csv
}

fn data_dir() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp directory");
    std::fs::write(dir.path().join("chicago.csv"), chicago_csv()).unwrap();
    std::fs::write(
        dir.path().join("washington.csv"),
        ",Start Time,End Time,Trip Duration,Start Station,End Station,User Type\n\
         1,2017-06-05 10:00:00,2017-06-05 10:05:00,300,A,B,Subscriber\n",
    )
    .unwrap();
    dir
}

fn run_session(dir: &TempDir, input: &str) -> String {
    let console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
    let reader = TripReader::new(DataConfig::new(dir.path()));
    let mut session = Session::new(console, reader).with_quiet(true);
    session.run().unwrap();
    String::from_utf8(session.into_console().into_output()).unwrap()
}

#[test]
fn test_month_filter_over_loaded_file() {
    let dir = data_dir();
    let reader = TripReader::new(DataConfig::new(dir.path()));
    let table = reader.load_city(City::Chicago).unwrap();
    assert_eq!(table.len(), 12);

    let march = FilterCriteria::new(City::Chicago, "March", "all");
    assert_eq!(TripFilter::from_criteria(&march).apply(&table).len(), 1);

    let typo = FilterCriteria::new(City::Chicago, "marhc", "all");
    assert_eq!(TripFilter::from_criteria(&typo).apply(&table).len(), 0);
}

#[test]
fn test_reports_over_loaded_file() {
    let dir = data_dir();
    let table = TripReader::new(DataConfig::new(dir.path()))
        .load_city(City::Chicago)
        .unwrap();

    let stations = StationAnalyzer::new().analyze(&table).unwrap();
    assert_eq!(
        stations.most_common_trip,
        ("Clark St to Lake St".to_string(), 12)
    );

    let durations = DurationAnalyzer::new().analyze(&table).unwrap();
    assert_eq!(durations.total_seconds, 7800.0);
    assert_eq!(durations.mean_seconds, Some(650.0));

    let users = UserAnalyzer::new().analyze(&table).unwrap();
    assert_eq!(
        users.user_types,
        vec![("Subscriber".to_string(), 8), ("Customer".to_string(), 4)]
    );
    assert!(users.summary().contains("Earliest year of birth: 1971"));
    assert!(users.summary().contains("Most recent year of birth: 1982"));
}

#[test]
fn test_full_session_with_paging() {
    let dir = data_dir();
    let output = run_session(&dir, "chicago\nall\nall\nyes\nyes\nyes\nno\n");

    assert!(output.contains("Most common trip: Clark St to Lake St (12 trips)"));
    assert!(output.contains("Gender counts:"));
    assert_eq!(output.matches(NEXT_PAGE_PROMPT).count(), 2);
    assert_eq!(output.matches(END_OF_DATA).count(), 1);
    assert_eq!(output.matches(RESTART_PROMPT).count(), 1);
}

#[test]
fn test_session_across_cities() {
    let dir = data_dir();
    let output = run_session(
        &dir,
        "seattle\nwashington\nall\nall\nno\nyes\nchicago\njune\nall\nno\nno\n",
    );

    assert_eq!(output.matches(CITY_PROMPT).count(), 3);
    assert!(output.contains("Gender and birth year information not available."));
    assert!(output.contains("Most common month: 6 (June)"));
}

#[test]
fn test_missing_resource_surfaces_as_error() {
    let dir = TempDir::new().unwrap();
    let console = Console::new(Cursor::new(b"new york city\nall\nall\n".to_vec()), Vec::new());
    let mut session =
        Session::new(console, TripReader::new(DataConfig::new(dir.path()))).with_quiet(true);

    let err = session.run().unwrap_err();
    assert!(matches!(
        err,
        BikeshareError::ResourceNotFound {
            city: City::NewYorkCity,
            ..
        }
    ));
}
