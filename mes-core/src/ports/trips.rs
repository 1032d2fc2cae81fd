use crate::models::TripRecord;

/// Interface for suppliers of the historical trip dataset.
///
/// The analytical core does not care where trips come from: a local file, a
/// remote store, or an in-memory fixture in tests. Whatever the source, the
/// dataset is acquired once per process and then frozen: every derived value
/// is a pure function of the loaded records, so there is nothing to refresh
/// and no concurrent mutation to guard against.
///
/// Loading is synchronous by design. It happens exactly once, at startup,
/// before any computation or serving begins.
pub trait TripSource {
    /// Error type for acquisition failures
    type Error: std::error::Error;

    /// Produce the full trip dataset.
    ///
    /// Implementations should return only records within the analytical
    /// domain (see [`TripRecord::in_domain`]); how out-of-domain rows are
    /// reported is up to the adapter.
    fn load(&self) -> Result<Vec<TripRecord>, Self::Error>;
}
