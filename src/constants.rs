//! Crate-wide constants

// Channel and buffer constants
pub const CHANNEL_BUFFER_SIZE: usize = 1_024;

// Unit conversions used by the reporter
pub const NANOS_PER_MILLI: f64 = 1e6;
pub const BYTES_PER_KIB: f64 = 1024.0;

// Percentile used for the tail latency line
pub const TAIL_PERCENTILE: usize = 99;

// Configuration limits
pub const MAX_CONNECTIONS_LIMIT: u32 = 100_000;

// Logging
pub const DEBUG_LOG_INTERVAL: u64 = 10_000;
