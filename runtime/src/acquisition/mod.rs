//! Network acquisition: page fetches, target normalization, DNS lookups.

pub mod page_fetcher;
pub mod resolver;
pub mod target;
