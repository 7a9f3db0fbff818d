use spindle::DataSourceError;
use spindle::config::ConfigError as WheelConfigError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PickerError {
    #[error("Invalid wheel items: {0}")]
    DataSource(#[from] DataSourceError),
    #[error("Invalid wheel config: {0}")]
    Config(#[from] WheelConfigError),
}
