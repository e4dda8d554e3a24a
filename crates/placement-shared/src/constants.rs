//! Application-wide constants

/// `database.url` value that selects the in-memory store instead of PostgreSQL.
pub const MEMORY_DATABASE_URL: &str = "memory://";

pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Startup connection attempts before the server gives up on PostgreSQL.
pub const DEFAULT_CONNECT_ATTEMPTS: u32 = 10;
pub const DEFAULT_CONNECT_BACKOFF_MS: u64 = 1_000;

/// Initial status of every freshly submitted revision.
pub const STATUS_PENDING: &str = "pending";
pub const STATUS_APPROVED: &str = "approved";
pub const STATUS_REJECTED: &str = "rejected";
