pub mod trip_reader;

pub use trip_reader::{parse_timestamp, TripReader};
