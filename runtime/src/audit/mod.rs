//! SEO audit pipeline.

pub mod analyzer;
pub mod recommend;
pub mod report;
pub mod scorer;
