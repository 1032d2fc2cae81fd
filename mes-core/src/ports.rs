mod trips;

pub use trips::TripSource;
