pub mod app;
pub mod picker;
pub mod theme;
