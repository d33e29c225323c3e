//! Shared storefront constants.

/// Default number of orders shown per page in the feed and history slices.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// How long an authenticated session stays valid after the last successful
/// probe, login, or registration, in hours.
pub const SESSION_TTL_HOURS: i64 = 24;

/// How long a persisted catalog/feed snapshot is honored on hydration, in
/// hours.
pub const SNAPSHOT_TTL_HOURS: i64 = 24;
