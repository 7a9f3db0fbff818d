use super::{DataSourceError, WheelDataSource, cells_to_degrees};
use std::fmt::Debug;
use std::hash::Hash;

/// A bounded list. The wheel stops at the first and last item.
#[derive(Debug, Clone)]
pub struct FiniteDataSource<T> {
    items: Vec<T>,
    initial_selection: T,
    initial_index: usize,
}

impl<T: Clone + Eq + Hash + Debug> FiniteDataSource<T> {
    pub fn new(items: Vec<T>, initial_selection: T) -> Result<Self, DataSourceError> {
        if items.is_empty() {
            return Err(DataSourceError::Empty);
        }
        let initial_index = items
            .iter()
            .position(|item| *item == initial_selection)
            .ok_or_else(|| DataSourceError::MissingSelection(format!("{initial_selection:?}")))?;

        Ok(Self {
            items,
            initial_selection,
            initial_index,
        })
    }

    /// Absolute list index of the item `offset` cells from the initial selection.
    fn index_at(&self, offset: i32) -> Option<usize> {
        let index = self.initial_index as i64 + offset as i64;
        usize::try_from(index)
            .ok()
            .filter(|&index| index < self.items.len())
    }

    fn dragging_start_index(&self, dragging_start_offset: Option<i32>) -> Option<i64> {
        dragging_start_offset.map(|offset| self.initial_index as i64 + offset as i64)
    }
}

impl<T: Clone + Eq + Hash + Debug> WheelDataSource for FiniteDataSource<T> {
    type Item = T;

    fn initial_selection(&self) -> &T {
        &self.initial_selection
    }

    fn set_initial_selection(&mut self, item: T) {
        if let Some(index) = self.items.iter().position(|i| *i == item) {
            self.initial_index = index;
            self.initial_selection = item;
        }
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn item_at(&self, offset: i32) -> Option<T> {
        self.index_at(offset).map(|index| self.items[index].clone())
    }

    fn offset_of(&self, item: &T) -> Option<i32> {
        let index = self.items.iter().position(|i| i == item)?;
        i32::try_from(index as i64 - self.initial_index as i64).ok()
    }

    fn limit_degrees_translation(&self, raw: f64, dragging_start_offset: Option<i32>) -> f64 {
        let max = self.max_translation(dragging_start_offset);
        let min = self.min_translation(dragging_start_offset);
        raw.max(min).min(max)
    }

    /// Items above the drag origin, in degrees.
    fn max_translation(&self, dragging_start_offset: Option<i32>) -> f64 {
        self.dragging_start_index(dragging_start_offset)
            .map_or(0.0, cells_to_degrees)
    }

    /// Items below the drag origin, in negative degrees.
    fn min_translation(&self, dragging_start_offset: Option<i32>) -> f64 {
        self.dragging_start_index(dragging_start_offset)
            .map_or(0.0, |index| {
                -cells_to_degrees(self.items.len() as i64 - index - 1)
            })
    }
}
