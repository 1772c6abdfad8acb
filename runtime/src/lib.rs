//! SEO audit runtime.
//!
//! Fetches a single page, extracts on-page SEO signals, scores them and
//! produces recommendations. Also hosts the geolocation and traffic
//! estimate heuristics and the HTTP API that exposes all three.

pub mod acquisition;
pub mod audit;
pub mod cli;
pub mod config;
pub mod error;
pub mod extraction;
pub mod geo;
pub mod server;
pub mod traffic;

pub use audit::analyzer::PageAnalyzer;
pub use audit::report::AuditReport;
pub use config::ServiceConfig;
pub use error::AnalyzeError;
pub use extraction::signals::PageSignals;
