//! Tabular location sources.
//!
//! [`CsvLocationRepository`] implements
//! [`golf_router_core::LocationRepository`] over a CSV file. A [`CsvSchema`]
//! names the columns holding each field, so the golf course and station
//! datasets share one loader.

mod csv_file;

pub use csv_file::{CsvLocationRepository, CsvRepositoryError, CsvSchema};
