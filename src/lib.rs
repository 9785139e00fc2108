//! Iterative vs recursive linear search, timed over growing prefixes of a
//! price list.
//!
//! The measuring core ([`search`], [`timer`], [`averager`], [`driver`]) is
//! free of I/O. Loading prices, resolving the target and drawing charts live
//! in [`prices`], [`target`], [`report`] and [`plot`].

pub mod averager;
pub mod cli;
pub mod driver;
pub mod error;
pub mod plot;
pub mod prices;
pub mod progress;
pub mod report;
pub mod search;
pub mod target;
pub mod timer;

pub use driver::{BenchConfig, BenchmarkDriver, BenchmarkReport};
pub use error::BenchError;
pub use search::{Algorithm, SearchError, search_iterative, search_recursive};
