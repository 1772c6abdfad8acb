//! Traffic volume guess derived from a single page audit.

pub mod estimate;

pub use estimate::{estimate_from_page, TrafficEstimate};
