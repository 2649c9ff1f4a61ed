use crate::domain::ports::Transformer;
use crate::utils::error::{ContractError, Result};

/// Parses decimal text into an `f64`.
///
/// Surrounding whitespace is ignored. `NaN` and infinity spellings are
/// rejected even though `f64::from_str` accepts them.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecimalParser;

impl DecimalParser {
    pub fn new() -> Self {
        Self
    }
}

impl<'a> Transformer<&'a str> for DecimalParser {
    type Output = f64;
    type Error = ContractError;

    fn transform(&self, value: &'a str) -> Result<f64> {
        parse_decimal(value)
    }
}

pub fn parse_decimal(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ContractError::parse(text, "empty input"));
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|e: std::num::ParseFloatError| ContractError::parse(text, e.to_string()))?;

    if !value.is_finite() {
        return Err(ContractError::parse(text, "not a finite decimal"));
    }

    tracing::debug!("Parsed '{}' as {}", text, value);
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_transform_decimal_text() {
        let parsed = DecimalParser::new().transform("123.45").unwrap();
        assert_relative_eq!(parsed, 123.45);
    }

    #[test]
    fn test_transform_accepts_signs_exponents_and_padding() {
        let parser = DecimalParser::new();
        assert_relative_eq!(parser.transform("-0.5").unwrap(), -0.5);
        assert_relative_eq!(parser.transform("1e3").unwrap(), 1000.0);
        assert_relative_eq!(parser.transform("  42 ").unwrap(), 42.0);
    }

    #[test]
    fn test_transform_rejects_non_numeric_text() {
        let err = DecimalParser::new().transform("abc").unwrap_err();
        match err {
            ContractError::Parse { input, .. } => assert_eq!(input, "abc"),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_transform_rejects_empty_and_non_finite() {
        let parser = DecimalParser::new();
        assert!(parser.transform("").is_err());
        assert!(parser.transform("   ").is_err());
        assert!(parser.transform("NaN").is_err());
        assert!(parser.transform("inf").is_err());
    }
}
