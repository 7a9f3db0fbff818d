use super::WheelPicker;
use crate::error::PickerError;
use spindle::{FiniteDataSource, WheelConfig, WheelEngine};
use std::fmt::Debug;
use std::hash::Hash;

/// A wheel with hard ends; rows past either end are left blank.
pub type FiniteWheelPicker<T> = WheelPicker<FiniteDataSource<T>>;

impl<T> WheelPicker<FiniteDataSource<T>>
where
    T: Clone + Eq + Hash + Debug + 'static,
{
    pub fn finite(
        selection: T,
        items: Vec<T>,
        config: WheelConfig,
        label: impl Fn(&T) -> String + 'static,
    ) -> Result<Self, PickerError> {
        let config = config.validated()?;
        let data_source = FiniteDataSource::new(items, selection.clone())?;
        let engine = WheelEngine::new(selection, data_source, &config);
        log::debug!("Finite wheel over {} items", engine.data_source().len());

        Ok(Self::new(engine, config, move |item| {
            item.map(&label).unwrap_or_default()
        }))
    }
}
