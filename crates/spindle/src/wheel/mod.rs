pub mod animation;
pub mod engine;
pub mod geometry;
pub mod gesture;

pub use animation::Deceleration;
pub use engine::{AdjustDirection, WheelAction, WheelEngine, WheelState};
pub use geometry::RowTransform;
pub use gesture::{DragRelease, DragSample, DragTracker, ReleaseKind, ReleaseMetrics};

pub const ROW_COUNT: usize = 9;
pub const CENTER_ROW: usize = 4;
pub const DEGREES_PER_ROW: f64 = 18.0; // half a turn split over ten stops
pub const CELLS_PER_WHEEL: f64 = 10.0; // one cell is height / 10 px of travel
pub const ROW_SPACING: f64 = 6.0;
pub const ANCHOR_DEPTH: f64 = 15.0; // rows rotate about an axis this far behind them

pub const DRAG_DAMPING: f64 = 0.6;
pub const FRAME_RATE: f64 = 120.0;
pub const RELEASE_DECELERATION_FRAMES: f64 = 120.0;
pub const SELECT_DECELERATION_FRAMES: f64 = 60.0;
pub const MAX_FLING_WHEELS: f64 = 3.0;

// Release classification, seconds and pixels
pub const INERTIAL_WINDOW: f64 = 0.1;
pub const INERTIAL_PREDICTED_WINDOW: f64 = 0.15;
pub const SETTLE_PAUSE: f64 = 0.01;
pub const SETTLE_DELTA: f64 = 2.0;

// Feedback debounce, degrees
pub const FEEDBACK_MIN_TRAVEL: f64 = 0.8;
pub const FEEDBACK_EDGE_TOLERANCE: f64 = 1.0;
