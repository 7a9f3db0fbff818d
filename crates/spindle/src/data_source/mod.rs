use std::fmt::Debug;
use std::hash::Hash;
use thiserror::Error;

pub mod circular;
pub mod finite;

pub use circular::CircularDataSource;
pub use finite::FiniteDataSource;

use crate::wheel::DEGREES_PER_ROW;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataSourceError {
    #[error("Wheel picker needs at least one item")]
    Empty,
    #[error("Initial selection {0} is not one of the items")]
    MissingSelection(String),
}

/// Maps integer offsets, relative to the selection captured at construction,
/// onto items and bounds how far the wheel may rotate from a drag origin.
///
/// Translation bounds are expressed in wheel degrees, one item per
/// [`DEGREES_PER_ROW`]. Positive degrees move towards the head of the list.
pub trait WheelDataSource {
    type Item: Clone + Eq + Hash + Debug;

    fn initial_selection(&self) -> &Self::Item;

    /// Moves the offset origin. Items not in the list are ignored.
    fn set_initial_selection(&mut self, item: Self::Item);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn item_at(&self, offset: i32) -> Option<Self::Item>;

    fn offset_of(&self, item: &Self::Item) -> Option<i32>;

    /// Signed number of cells between `origin` and `item`, or 0 when the
    /// item is unknown.
    fn translation_offset(&self, item: &Self::Item, origin: i32) -> i32 {
        self.offset_of(item).map_or(0, |offset| offset - origin)
    }

    fn limit_degrees_translation(&self, raw: f64, dragging_start_offset: Option<i32>) -> f64;

    fn max_translation(&self, dragging_start_offset: Option<i32>) -> f64;

    fn min_translation(&self, dragging_start_offset: Option<i32>) -> f64;

    /// Whether [`Self::max_translation`] and [`Self::min_translation`] are
    /// meaningful limits. Wrap-around sources never run out of items.
    fn is_bounded(&self) -> bool {
        true
    }
}

pub(crate) fn cells_to_degrees(cells: i64) -> f64 {
    cells as f64 * DEGREES_PER_ROW
}
