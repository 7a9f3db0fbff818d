pub mod config;
pub mod error;
pub mod events;
pub mod feedback;
pub mod gui;
pub mod sys;

pub use error::PickerError;
pub use gui::picker::{CircularWheelPicker, FiniteWheelPicker, WheelPicker};
