//! Extraction and classification of match-report data into series records.
//!
//! Every function in here is pure: the same input always yields the same
//! output, and the only shared state is the read-only [`tables::Tables`].

pub mod agents;
pub mod dates;
pub mod maps;
pub mod rounds;
pub mod series;
pub mod tables;
pub mod teams;
pub mod veto;

pub use tables::Tables;
