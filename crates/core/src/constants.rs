//! Shared constants for asides.

/// Number of asides returned by the recent listing and the feed.
pub const RECENT_LIMIT: usize = 10;

/// Default host for both the server bind address and the client.
pub const DEFAULT_HOST: &str = "localhost";

/// Default port for both the server bind address and the client.
pub const DEFAULT_PORT: u16 = 4567;

/// Default username for the bulk-delete credential pair.
pub const DEFAULT_USERNAME: &str = "asides";

/// Default password for the bulk-delete credential pair.
pub const DEFAULT_PASSWORD: &str = "as1d3s";

/// Realm advertised in the `WWW-Authenticate` challenge.
pub const AUTH_REALM: &str = "Asides";

/// Feed-level title.
pub const FEED_TITLE: &str = "Recently asides";

/// Author name attached to every feed entry.
pub const FEED_AUTHOR: &str = "Asides";

/// SQLite connection pool: maximum connections.
pub const SQLITE_POOL_MAX_CONNECTIONS: u32 = 5;

/// SQLite connection pool: acquire timeout in seconds.
pub const SQLITE_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// SQLite busy timeout in seconds (writers waiting on the database lock).
pub const SQLITE_BUSY_TIMEOUT_SECS: u64 = 5;

/// HTTP client request timeout in seconds.
pub const CLIENT_TIMEOUT_SECS: u64 = 30;
