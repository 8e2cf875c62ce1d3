use crate::core::format::{DEFAULT_DELIMITER, DEFAULT_DEPARTMENT};
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_single_line, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

/// Options controlling how a department is rendered as a single line.
///
/// ```toml
/// delimiter = ", "
/// default_department = "${REPORT_DEPARTMENT}"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    pub delimiter: String,
    pub default_department: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
            default_department: DEFAULT_DEPARTMENT.to_string(),
        }
    }
}

impl FormatOptions {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        let options: Self = toml::from_str(&processed_content)?;
        tracing::debug!(
            delimiter = %options.delimiter,
            default_department = %options.default_department,
            "Loaded format options"
        );
        Ok(options)
    }

    /// Replaces `${VAR}` with the variable's value; unset variables are left as-is.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_PATTERN
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }
}

impl Validate for FormatOptions {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("default_department", &self.default_department)?;
        validate_single_line("delimiter", &self.delimiter)?;
        Ok(())
    }
}
