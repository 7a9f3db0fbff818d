use super::{DataSourceError, WheelDataSource};
use std::fmt::Debug;
use std::hash::Hash;

/// A wrap-around list. Offsets are taken modulo the list length, so the wheel
/// spins forever in both directions.
#[derive(Debug, Clone)]
pub struct CircularDataSource<T> {
    items: Vec<T>,
    initial_selection: T,
    initial_index: usize,
}

impl<T: Clone + Eq + Hash + Debug> CircularDataSource<T> {
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

    fn wrapped_index(&self, offset: i32) -> usize {
        let len = self.items.len() as i64;
        (self.initial_index as i64 + offset as i64).rem_euclid(len) as usize
    }
}

impl<T: Clone + Eq + Hash + Debug> WheelDataSource for CircularDataSource<T> {
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
        self.items.get(self.wrapped_index(offset)).cloned()
    }

    fn offset_of(&self, item: &T) -> Option<i32> {
        let index = self.items.iter().position(|i| i == item)?;
        i32::try_from(index as i64 - self.initial_index as i64).ok()
    }

    /// Shortest way around the wheel. Ties go forward.
    fn translation_offset(&self, item: &T, origin: i32) -> i32 {
        let Some(offset) = self.offset_of(item) else {
            return 0;
        };
        let len = self.items.len() as i64;
        let forward = (offset as i64 - origin as i64).rem_euclid(len);
        let distance = if forward * 2 > len {
            forward - len
        } else {
            forward
        };
        distance as i32
    }

    fn limit_degrees_translation(&self, raw: f64, _dragging_start_offset: Option<i32>) -> f64 {
        raw
    }

    fn max_translation(&self, _dragging_start_offset: Option<i32>) -> f64 {
        0.0
    }

    fn min_translation(&self, _dragging_start_offset: Option<i32>) -> f64 {
        0.0
    }

    fn is_bounded(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hours() -> CircularDataSource<u8> {
        CircularDataSource::new((0..12).collect(), 3).unwrap()
    }

    #[test]
    fn test_item_at_wraps_in_both_directions() {
        let source = hours();
        assert_eq!(source.item_at(0), Some(3));
        assert_eq!(source.item_at(9), Some(0));
        assert_eq!(source.item_at(-4), Some(11));
        assert_eq!(source.item_at(-16), Some(11));
        assert!(source.item_at(i32::MAX).is_some());
    }

    #[test]
    fn test_item_at_has_list_length_period() {
        let source = hours();
        let len = source.len() as i32;
        for offset in -40..40 {
            assert_eq!(source.item_at(offset), source.item_at(offset.rem_euclid(len)));
        }
    }

    #[test]
    fn test_translation_offset_takes_shortest_path() {
        let source = hours();
        // 3 -> 11 is eight steps forward or four back
        assert_eq!(source.translation_offset(&11, 0), -4);
        assert_eq!(source.translation_offset(&5, 0), 2);
        // origin after a full extra spin
        assert_eq!(source.translation_offset(&5, 12), 2);
        assert_eq!(source.translation_offset(&9, 0), 6);
        assert_eq!(source.translation_offset(&42, 0), 0);
    }

    #[test]
    fn test_translation_is_unbounded() {
        let source = hours();
        assert!(!source.is_bounded());
        assert_eq!(source.limit_degrees_translation(1234.5, Some(3)), 1234.5);
        assert_eq!(source.limit_degrees_translation(-987.0, None), -987.0);
        assert_eq!(source.max_translation(Some(0)), 0.0);
        assert_eq!(source.min_translation(Some(0)), 0.0);
    }

    #[test]
    fn test_single_item_wheel() {
        let source = CircularDataSource::new(vec!["only"], "only").unwrap();
        assert_eq!(source.item_at(-7), Some("only"));
        assert_eq!(source.translation_offset(&"only", 5), 0);
    }

    #[test]
    fn test_rejects_empty_list() {
        assert_eq!(
            CircularDataSource::<u8>::new(Vec::new(), 0).unwrap_err(),
            DataSourceError::Empty
        );
    }
}
