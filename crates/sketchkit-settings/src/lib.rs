//! SketchKit Settings Crate
//!
//! Handles sketch configuration: loading, saving and validation.

pub mod config;
pub mod error;

pub use config::{
    CanvasSettings, MotifSettings, SketchConfig, CONFIG_DIR_NAME, CONFIG_FILE_NAME,
};
pub use error::{SettingsError, SettingsResult};
