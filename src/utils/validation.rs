use crate::utils::error::{BookError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Rejects only the empty string; malformed or blank URLs surface later as
/// transport failures.
pub fn validate_api_url(url: &str) -> Result<()> {
    if url.is_empty() {
        return Err(BookError::invalid_argument("apiUrl is required"));
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(BookError::ConfigError {
            message: format!("{} must be at least {}, got {}", field_name, min_value, value),
        });
    }
    Ok(())
}
