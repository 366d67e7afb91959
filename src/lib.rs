//! sigtrader: rule-based trading strategy backtester.
//!
//! Hexagonal architecture: engine logic in [`domain`], port traits in
//! [`ports`], concrete collaborators in [`adapters`].

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod ports;
