pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, toml_config::TomlConfig};

pub use core::{codec::DishFormat, engine::ExportEngine, export::ExportPipeline};
pub use domain::model::DishRecord;
pub use utils::error::{DishError, Result};
