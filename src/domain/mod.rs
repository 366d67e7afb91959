//! Core engine: data model, indicators, signal generation, trade
//! extraction and performance statistics.

pub mod aggregate;
pub mod bar;
pub mod error;
pub mod extractor;
pub mod indicator;
pub mod period;
pub mod series;
pub mod signal;
pub mod strategy;
pub mod summary;
pub mod trade;
