//! Utility Module
//!
//! - [`time`]: time sources that drive lerps ([`SystemClock`], [`ManualClock`])

pub mod time;

pub use time::{ManualClock, SystemClock, TimeSource};
