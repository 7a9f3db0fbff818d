//! Physics and data model for an iOS-style spinning wheel picker.
//!
//! The crate is toolkit-free: [`wheel::WheelEngine`] turns drag samples and
//! timer ticks into row transforms and selection commits, and a host toolkit
//! only has to paint the rows and forward input.

pub mod config;
pub mod data_source;
pub mod feedback;
pub mod wheel;

pub use config::{FontWeight, WheelConfig};
pub use data_source::{CircularDataSource, DataSourceError, FiniteDataSource, WheelDataSource};
pub use feedback::SelectionFeedback;
pub use wheel::{AdjustDirection, WheelAction, WheelEngine, WheelState};
