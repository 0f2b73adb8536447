use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct ExportEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ExportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting dish export");

        let records = self.pipeline.extract().await?;
        tracing::info!("Extracted {} dishes", records.len());

        let result = self.pipeline.transform(records).await?;
        tracing::info!(
            "Rendered {} dishes into {} format(s)",
            result.records.len(),
            result.outputs.len()
        );

        let output_path = self.pipeline.load(result).await?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DishRecord, ExportResult};
    use crate::utils::error::DishError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingPipeline {
        loads: AtomicUsize,
        fail_extract: bool,
    }

    #[async_trait::async_trait]
    impl Pipeline for CountingPipeline {
        async fn extract(&self) -> Result<Vec<DishRecord>> {
            if self.fail_extract {
                return Err(DishError::ProcessingError {
                    message: "broken input".to_string(),
                });
            }
            Ok(vec![DishRecord::new().with_id(1), DishRecord::new().with_id(2)])
        }

        async fn transform(&self, records: Vec<DishRecord>) -> Result<ExportResult> {
            Ok(ExportResult {
                records,
                outputs: vec![],
            })
        }

        async fn load(&self, result: ExportResult) -> Result<String> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            Ok(format!("loaded-{}", result.records.len()))
        }
    }

    #[tokio::test]
    async fn test_run_passes_records_through_every_stage() {
        let engine = ExportEngine::new(CountingPipeline::default());

        assert_eq!(engine.run().await.unwrap(), "loaded-2");
        assert_eq!(engine.pipeline.loads.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_run_stops_on_extract_error() {
        let engine = ExportEngine::new(CountingPipeline {
            fail_extract: true,
            ..Default::default()
        });

        assert!(matches!(
            engine.run().await,
            Err(DishError::ProcessingError { .. })
        ));
        assert_eq!(engine.pipeline.loads.load(Ordering::SeqCst), 0);
    }
}
