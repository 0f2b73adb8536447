use crate::core::codec::DishFormat;
use crate::domain::model::{DishRecord, ExportResult};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn output_formats(&self) -> &[DishFormat];
    /// Zip archive name; `None` writes plain files.
    fn bundle_name(&self) -> Option<&str>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<DishRecord>>;
    async fn transform(&self, records: Vec<DishRecord>) -> Result<ExportResult>;
    async fn load(&self, result: ExportResult) -> Result<String>;
}
