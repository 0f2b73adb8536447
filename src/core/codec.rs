use crate::domain::model::DishRecord;
use crate::utils::error::{DishError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

pub const HEADER: [&str; 6] = [
    "id",
    "name",
    "owner_id",
    "cooking_instructions",
    "small_photo_link",
    "big_photo_link",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum DishFormat {
    Json,
    Csv,
    Tsv,
    Toml,
}

impl DishFormat {
    pub const ALL: [DishFormat; 4] = [
        DishFormat::Json,
        DishFormat::Csv,
        DishFormat::Tsv,
        DishFormat::Toml,
    ];

    pub fn extension(&self) -> &'static str {
        match self {
            DishFormat::Json => "json",
            DishFormat::Csv => "csv",
            DishFormat::Tsv => "tsv",
            DishFormat::Toml => "toml",
        }
    }

    pub fn from_extension(ext: &str) -> Result<Self> {
        let lowered = ext.trim().trim_start_matches('.').to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|format| format.extension() == lowered)
            .ok_or_else(|| DishError::UnsupportedFormat {
                value: ext.to_string(),
            })
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) => Self::from_extension(ext),
            None => Err(DishError::UnsupportedFormat {
                value: path.display().to_string(),
            }),
        }
    }

    fn delimiter(&self) -> u8 {
        match self {
            DishFormat::Tsv => b'\t',
            _ => b',',
        }
    }
}

impl fmt::Display for DishFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for DishFormat {
    type Err = DishError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_extension(s)
    }
}

impl TryFrom<String> for DishFormat {
    type Error = DishError;

    fn try_from(value: String) -> Result<Self> {
        Self::from_extension(&value)
    }
}

/// TOML has no top-level arrays, so records live under `[[dish]]`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DishDocument {
    dish: Vec<DishRecord>,
}

#[derive(Serialize)]
struct DishDocumentRef<'a> {
    dish: &'a [DishRecord],
}

pub fn decode(format: DishFormat, data: &[u8]) -> Result<Vec<DishRecord>> {
    match format {
        DishFormat::Json => decode_json(data),
        DishFormat::Csv | DishFormat::Tsv => decode_delimited(data, format.delimiter()),
        DishFormat::Toml => decode_toml(data),
    }
}

pub fn encode(format: DishFormat, records: &[DishRecord]) -> Result<Vec<u8>> {
    match format {
        DishFormat::Json => Ok(serde_json::to_vec_pretty(records)?),
        DishFormat::Csv | DishFormat::Tsv => encode_delimited(records, format.delimiter()),
        DishFormat::Toml => {
            let text = toml::to_string(&DishDocumentRef { dish: records })?;
            Ok(text.into_bytes())
        }
    }
}

fn decode_json(data: &[u8]) -> Result<Vec<DishRecord>> {
    let value: serde_json::Value = serde_json::from_slice(data)?;
    match value {
        serde_json::Value::Array(_) => Ok(serde_json::from_value(value)?),
        serde_json::Value::Object(_) => Ok(vec![serde_json::from_value(value)?]),
        other => Err(DishError::ProcessingError {
            message: format!(
                "Expected a JSON array or object of dishes, found {}",
                json_kind(&other)
            ),
        }),
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

fn decode_delimited(data: &[u8], delimiter: u8) -> Result<Vec<DishRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .from_reader(data);

    let mut records = Vec::new();
    for row in reader.deserialize::<DishRecord>() {
        records.push(row?);
    }
    Ok(records)
}

fn encode_delimited(records: &[DishRecord], delimiter: u8) -> Result<Vec<u8>> {
    // Header is written by hand so an empty list still produces one.
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(HEADER)?;
    for record in records {
        writer.serialize(record)?;
    }

    writer.into_inner().map_err(|e| DishError::ProcessingError {
        message: format!("Failed to flush delimited output: {}", e),
    })
}

fn decode_toml(data: &[u8]) -> Result<Vec<DishRecord>> {
    let text = std::str::from_utf8(data).map_err(|e| DishError::ProcessingError {
        message: format!("TOML input is not valid UTF-8: {}", e),
    })?;
    let document: DishDocument = toml::from_str(text)?;
    Ok(document.dish)
}
