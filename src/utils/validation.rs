use crate::core::codec::DishFormat;
use crate::utils::error::{DishError, Result};

/// Checks configuration before any file is touched. Dish records
/// themselves are never validated.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(DishError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(DishError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| DishError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_formats(field_name: &str, formats: &[DishFormat]) -> Result<()> {
    if formats.is_empty() {
        return Err(DishError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: String::new(),
            reason: "At least one output format is required".to_string(),
        });
    }
    Ok(())
}

pub fn validate_bundle_name(field_name: &str, name: &str) -> Result<()> {
    validate_path(field_name, name)?;

    let is_zip = std::path::Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("zip"))
        .unwrap_or(false);

    if !is_zip {
        return Err(DishError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: "Bundle name must end with .zip".to_string(),
        });
    }

    if name.contains('/') || name.contains('\\') {
        return Err(DishError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: "Bundle name must be a file name, not a path".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output_path", "./output").is_ok());
        assert!(validate_path("output_path", "").is_err());
        assert!(validate_path("output_path", "   ").is_err());
        assert!(validate_path("output_path", "out\0put").is_err());
    }

    #[test]
    fn test_validate_formats() {
        assert!(validate_formats("formats", &[DishFormat::Csv]).is_ok());
        assert!(validate_formats("formats", &[]).is_err());
    }

    #[test]
    fn test_validate_bundle_name() {
        assert!(validate_bundle_name("bundle", "dishes.zip").is_ok());
        assert!(validate_bundle_name("bundle", "DISHES.ZIP").is_ok());
        assert!(validate_bundle_name("bundle", "dishes.tar").is_err());
        assert!(validate_bundle_name("bundle", "dishes").is_err());
        assert!(validate_bundle_name("bundle", "nested/dishes.zip").is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("dishes.json".to_string());
        let missing: Option<String> = None;

        assert_eq!(
            validate_required_field("source.input_path", &present).unwrap(),
            "dishes.json"
        );
        assert!(matches!(
            validate_required_field("source.input_path", &missing),
            Err(DishError::MissingConfigError { .. })
        ));
    }
}
