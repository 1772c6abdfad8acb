//! HTML signal extraction.

pub mod links;
pub mod signals;
