//! Domain geolocation via a third-party geo-IP service.

pub mod locator;

pub use locator::{GeoLocation, GeoLocator, GeoReport};
