#![deny(clippy::all)]

pub mod report;

pub use report::ItineraryReport;
