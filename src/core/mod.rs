pub mod codec;
pub mod engine;
pub mod export;

pub use crate::domain::model::{DishRecord, ExportResult, RenderedOutput};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
