//! Configuration: path resolution and the optional settings file.

pub mod paths;
pub mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, Settings};
