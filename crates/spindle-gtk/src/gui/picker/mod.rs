pub mod circular;
pub mod finite;
pub mod view;
pub mod widget;

pub use circular::CircularWheelPicker;
pub use finite::FiniteWheelPicker;
pub use view::{WheelFrame, draw};
pub use widget::WheelPicker;

pub const HIGHLIGHT_PADDING: f64 = 10.0; // selected band is a row plus this
pub const HIGHLIGHT_RADIUS: f64 = 8.0;
pub const HIGHLIGHT_ALPHA: f64 = 0.8;
pub const SIDE_MARGIN: f64 = 8.0;
pub const DIVIDER_WIDTH: f64 = 0.5;
pub const MIN_WIDTH: i32 = 120;

// A press that travels less than this is a tap, not a drag
pub const TAP_SLOP: f64 = 8.0;
