use crate::domain::model::{DepartmentMap, Report};
use crate::utils::error::{ReportError, Result};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

const ALL_EMPLOYEES: &str = "allEmployees";

impl Report {
    /// Parses `{"allEmployees": {"<department>": ["<employee>", ...], ...}}`.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content)?;
        Self::from_json_value(value)
    }

    /// Same document shape as [`Report::from_json_str`], written as TOML.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let table: toml::Table = toml::from_str(content)?;
        Self::from_json_value(serde_json::to_value(table)?)
    }

    /// Validates an untyped document and builds a report from it.
    ///
    /// Department order follows the document.
    pub fn from_json_value(value: Value) -> Result<Self> {
        let all_employees = parse_document(value).inspect_err(|e| {
            tracing::warn!("Rejected report document: {}", e);
        })?;
        Ok(Report::new(all_employees))
    }
}

fn parse_document(value: Value) -> Result<DepartmentMap> {
    let mut document = match value {
        Value::Object(document) => document,
        _ => return Err(missing_all_employees()),
    };
    let departments = match document.remove(ALL_EMPLOYEES) {
        Some(Value::Object(departments)) => departments,
        Some(other) => return Err(invalid_type(ALL_EMPLOYEES, "object", &other)),
        None => return Err(missing_all_employees()),
    };

    let mut map = DepartmentMap::new();
    for (name, employees) in departments {
        let path = format!("{}.{}", ALL_EMPLOYEES, name);
        let employees = match employees {
            Value::Array(employees) => employees,
            other => return Err(invalid_type(&path, "array", &other)),
        };
        let employees = employees
            .into_iter()
            .enumerate()
            .map(|(idx, employee)| match employee {
                Value::String(employee) => Ok(employee),
                other => Err(invalid_type(&format!("{}[{}]", path, idx), "string", &other)),
            })
            .collect::<Result<Vec<_>>>()?;
        map.insert(name, employees);
    }
    Ok(map)
}

fn missing_all_employees() -> ReportError {
    ReportError::MissingField {
        field: ALL_EMPLOYEES.to_string(),
    }
}

fn invalid_type(path: &str, expected: &str, found: &Value) -> ReportError {
    ReportError::InvalidType {
        path: path.to_string(),
        expected: expected.to_string(),
        found: type_name(found).to_string(),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl<'de> Deserialize<'de> for Report {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Report::from_json_value(value).map_err(serde::de::Error::custom)
    }
}
