use crate::utils::error::{CompareError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(CompareError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(CompareError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(CompareError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(CompareError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

/// A quantity is usable for pricing only when it is a positive, finite number.
pub fn is_valid_quantity(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

pub fn validate_quantity(value: f64) -> Result<f64> {
    if is_valid_quantity(value) {
        Ok(value)
    } else {
        Err(CompareError::invalid_quantity(value))
    }
}

/// Parses the raw text of a quantity field. Surrounding whitespace is ignored.
pub fn parse_quantity(raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if is_valid_quantity(value) => Ok(value),
        _ => Err(CompareError::invalid_quantity(trimmed)),
    }
}
