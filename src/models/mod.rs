pub mod city;
pub mod filter;
pub mod trip;

pub use city::City;
pub use filter::FilterCriteria;
pub use trip::{TripRecord, TripSchema, TripTable};
