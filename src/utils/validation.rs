use crate::utils::error::{ContractError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ContractError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    // NaN 不在任何區間內
    if !(value >= min && value <= max) {
        return Err(ContractError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_non_empty_list(field_name: &str, values: &[String]) -> Result<()> {
    if values.is_empty() {
        return Err(ContractError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: "[]".to_string(),
            reason: "List cannot be empty".to_string(),
        });
    }
    for value in values {
        validate_non_empty_string(field_name, value)?;
    }
    Ok(())
}

pub fn validate_unique_ids(field_name: &str, ids: &[i32]) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ContractError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: id.to_string(),
                reason: "Duplicate id".to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("greeting", "Hello").is_ok());
        assert!(validate_non_empty_string("greeting", "").is_err());
        assert!(validate_non_empty_string("greeting", "   ").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("chooser.threshold", 0.5, 0.0, 1.0).is_ok());
        assert!(validate_range("chooser.threshold", 1.0, 0.0, 1.0).is_ok());
        assert!(validate_range("chooser.threshold", 1.5, 0.0, 1.0).is_err());
        assert!(validate_range("chooser.threshold", f64::NAN, 0.0, 1.0).is_err());
    }

    #[test]
    fn test_validate_non_empty_list() {
        let companies = vec!["Meta".to_string(), "Apple".to_string()];
        assert!(validate_non_empty_list("showcase.companies", &companies).is_ok());
        assert!(validate_non_empty_list("showcase.companies", &[]).is_err());

        let blank = vec!["Meta".to_string(), " ".to_string()];
        assert!(validate_non_empty_list("showcase.companies", &blank).is_err());
    }

    #[test]
    fn test_validate_unique_ids() {
        assert!(validate_unique_ids("students", &[1, 2, 3]).is_ok());
        assert!(validate_unique_ids("students", &[1, 2, 1]).is_err());
    }
}
