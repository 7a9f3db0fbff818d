use super::WheelPicker;
use crate::error::PickerError;
use spindle::{CircularDataSource, WheelConfig, WheelEngine};
use std::fmt::Debug;
use std::hash::Hash;

/// A wheel that wraps around: scrolling past the last item shows the first.
pub type CircularWheelPicker<T> = WheelPicker<CircularDataSource<T>>;

impl<T> WheelPicker<CircularDataSource<T>>
where
    T: Clone + Eq + Hash + Debug + 'static,
{
    pub fn circular(
        selection: T,
        items: Vec<T>,
        config: WheelConfig,
        label: impl Fn(&T) -> String + 'static,
    ) -> Result<Self, PickerError> {
        let config = config.validated()?;
        let data_source = CircularDataSource::new(items, selection.clone())?;
        let engine = WheelEngine::new(selection, data_source, &config);
        log::debug!("Circular wheel over {} items", engine.data_source().len());

        Ok(Self::new(engine, config, move |item| {
            item.map(&label).unwrap_or_default()
        }))
    }
}
