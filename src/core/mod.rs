//! Core utilities shared across nimbus.

mod datetime;

pub use datetime::{parse_timestamp, parse_timestamp_on, Timestamp};
