use crate::core::codec::{self, DishFormat};
use crate::core::{ConfigProvider, DishRecord, ExportResult, Pipeline, RenderedOutput, Storage};
use crate::utils::error::{DishError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::path::Path;
use zip::write::{SimpleFileOptions, ZipWriter};

pub const MANIFEST_FILE: &str = "manifest.json";
const OUTPUT_STEM: &str = "dishes";

fn output_file_name(format: DishFormat) -> String {
    format!("{}.{}", OUTPUT_STEM, format.extension())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportManifest {
    pub generated_at: DateTime<Utc>,
    pub record_count: usize,
    pub formats: Vec<DishFormat>,
    pub files: Vec<String>,
}

/// What an export would read and write, without writing anything.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportPreview {
    pub input_path: String,
    pub input_format: DishFormat,
    pub record_count: usize,
    pub formats: Vec<DishFormat>,
    pub bundle: Option<String>,
    pub files: Vec<String>,
}

impl fmt::Display for ExportPreview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Input: {} ({}, {} dishes)",
            self.input_path, self.input_format, self.record_count
        )?;
        let formats: Vec<String> = self.formats.iter().map(|format| format.to_string()).collect();
        writeln!(f, "Formats: {}", formats.join(", "))?;
        match &self.bundle {
            Some(bundle) => writeln!(f, "Bundle: {}", bundle)?,
            None => writeln!(f, "Bundle: none, plain files")?,
        }
        for file in &self.files {
            writeln!(f, "Would write: {}", file)?;
        }
        Ok(())
    }
}

pub struct ExportPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> ExportPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    /// Reads and decodes the input, then reports the files `load` would write.
    pub async fn preview(&self) -> Result<ExportPreview> {
        let input_format = DishFormat::from_path(self.config.input_path())?;
        let records = self.extract().await?;
        let formats = self.requested_formats()?;
        let bundle = self.config.bundle_name().map(str::to_string);

        let files = match &bundle {
            Some(name) => vec![self.output_file(name)],
            None => formats
                .iter()
                .map(|format| self.output_file(&output_file_name(*format)))
                .collect(),
        };

        Ok(ExportPreview {
            input_path: self.config.input_path().to_string(),
            input_format,
            record_count: records.len(),
            formats,
            bundle,
            files,
        })
    }

    fn output_file(&self, file_name: &str) -> String {
        Path::new(self.config.output_path())
            .join(file_name)
            .to_string_lossy()
            .into_owned()
    }

    fn requested_formats(&self) -> Result<Vec<DishFormat>> {
        let mut formats: Vec<DishFormat> = Vec::new();
        for format in self.config.output_formats() {
            if !formats.contains(format) {
                formats.push(*format);
            }
        }

        if formats.is_empty() {
            return Err(DishError::ConfigError {
                message: "No output formats requested".to_string(),
            });
        }
        Ok(formats)
    }

    fn build_bundle(&self, result: &ExportResult) -> Result<Vec<u8>> {
        let manifest = ExportManifest {
            generated_at: Utc::now(),
            record_count: result.records.len(),
            formats: result.outputs.iter().map(|o| o.format).collect(),
            files: result.outputs.iter().map(|o| o.file_name.clone()).collect(),
        };

        let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default();

        for output in &result.outputs {
            zip.start_file(output.file_name.as_str(), options)?;
            zip.write_all(&output.content)?;
        }

        zip.start_file(MANIFEST_FILE, options)?;
        zip.write_all(&serde_json::to_vec_pretty(&manifest)?)?;

        let cursor = zip.finish()?;
        Ok(cursor.into_inner())
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ExportPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<DishRecord>> {
        let input = self.config.input_path();
        let format = DishFormat::from_path(input)?;

        tracing::debug!("Reading {} dishes from: {}", format, input);
        let data = self.storage.read_file(input).await?;
        let records = codec::decode(format, &data)?;

        tracing::info!("Read {} dishes from {}", records.len(), input);
        Ok(records)
    }

    async fn transform(&self, records: Vec<DishRecord>) -> Result<ExportResult> {
        let formats = self.requested_formats()?;
        let mut outputs = Vec::with_capacity(formats.len());

        for format in formats {
            let content = codec::encode(format, &records)?;
            tracing::debug!("Encoded {} dishes as {} ({} bytes)", records.len(), format, content.len());

            outputs.push(RenderedOutput {
                format,
                file_name: output_file_name(format),
                content,
            });
        }

        Ok(ExportResult { records, outputs })
    }

    async fn load(&self, result: ExportResult) -> Result<String> {
        match self.config.bundle_name() {
            Some(bundle) => {
                tracing::debug!("Creating bundle with {} files", result.outputs.len() + 1);
                let zip_data = self.build_bundle(&result)?;

                let bundle_path = self.output_file(bundle);
                tracing::debug!("Writing bundle ({} bytes) to {}", zip_data.len(), bundle_path);
                self.storage.write_file(&bundle_path, &zip_data).await?;
                Ok(bundle_path)
            }
            None => {
                for output in &result.outputs {
                    let path = self.output_file(&output.file_name);
                    tracing::debug!("Writing {} ({} bytes)", path, output.content.len());
                    self.storage.write_file(&path, &output.content).await?;
                }
                Ok(self.config.output_path().to_string())
            }
        }
    }
}
