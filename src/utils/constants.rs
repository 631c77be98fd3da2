/// Column headers in the bikeshare CSV files
pub const COL_START_TIME: &str = "Start Time";
pub const COL_END_TIME: &str = "End Time";
pub const COL_TRIP_DURATION: &str = "Trip Duration";
pub const COL_START_STATION: &str = "Start Station";
pub const COL_END_STATION: &str = "End Station";
pub const COL_USER_TYPE: &str = "User Type";
pub const COL_GENDER: &str = "Gender";
pub const COL_BIRTH_YEAR: &str = "Birth Year";

/// Timestamp layouts accepted for start/end time, tried in order
pub const TIMESTAMP_FORMATS: [&str; 3] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
];

/// Filter sentinel meaning "no filter"
pub const ALL_SELECTOR: &str = "all";

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Monday first, matching `chrono::Weekday::num_days_from_monday`
pub const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Raw data pager
pub const PAGE_SIZE: usize = 5;

/// Console layout
pub const SEPARATOR_WIDTH: usize = 40;
pub const AFFIRMATIVE: &str = "yes";

/// Configuration defaults
pub const DEFAULT_DATA_DIR: &str = ".";
pub const ENV_PREFIX: &str = "BIKESHARE";
