pub mod trip_filter;

pub use trip_filter::TripFilter;
