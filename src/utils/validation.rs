use crate::utils::error::{ReportError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ReportError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_single_line(field_name: &str, value: &str) -> Result<()> {
    if value.contains(['\n', '\r']) {
        return Err(ReportError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.escape_default().to_string(),
            reason: "Value must not contain line breaks".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("default_department", "engineering").is_ok());
        assert!(validate_non_empty_string("default_department", "").is_err());
        assert!(validate_non_empty_string("default_department", "   ").is_err());
    }

    #[test]
    fn test_validate_single_line() {
        assert!(validate_single_line("delimiter", " | ").is_ok());
        assert!(validate_single_line("delimiter", "").is_ok());
        assert!(validate_single_line("delimiter", ",\n").is_err());
        assert!(validate_single_line("delimiter", "\r").is_err());
    }
}
