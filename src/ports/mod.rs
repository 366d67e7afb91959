//! Port traits at the engine's seams: data acquisition, configuration
//! access and report emission.

pub mod config_port;
pub mod data_port;
pub mod report_port;
