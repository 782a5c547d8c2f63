/// Simulated time. Timestamps are processed in non-decreasing order.
pub type SimTime = f64;

/// 1-based identifier of a server or self-checkout counter.
///
/// Human servers occupy `1..=N`, self-checkout counters `N + 1..=N + K`.
pub type ServerId = usize;

/// 1-based identifier assigned to customers in arrival-list order.
pub type CustomerId = usize;
