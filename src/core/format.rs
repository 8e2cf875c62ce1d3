use crate::config::FormatOptions;
use crate::domain::ports::EmployeeGroups;
use crate::utils::error::{ReportError, Result};

pub const DEFAULT_DELIMITER: &str = " | ";
pub const DEFAULT_DEPARTMENT: &str = "engineering";

/// Joins one department's employees with `" | "`.
///
/// An empty department yields an empty string. Fails with
/// [`ReportError::UnknownDepartment`] when the department is absent.
pub fn format_department<G: EmployeeGroups>(groups: &G, department: &str) -> Result<String> {
    join_department(groups, department, DEFAULT_DELIMITER)
}

pub fn format_department_with<G: EmployeeGroups>(
    groups: &G,
    department: &str,
    options: &FormatOptions,
) -> Result<String> {
    join_department(groups, department, &options.delimiter)
}

pub fn format_default_department<G: EmployeeGroups>(
    groups: &G,
    options: &FormatOptions,
) -> Result<String> {
    join_department(groups, &options.default_department, &options.delimiter)
}

fn join_department<G: EmployeeGroups>(groups: &G, department: &str, delimiter: &str) -> Result<String> {
    let employees = groups
        .department(department)
        .ok_or_else(|| ReportError::UnknownDepartment {
            department: department.to_string(),
        })?;
    tracing::trace!(department, employees = employees.len(), "Formatting department");
    Ok(employees.join(delimiter))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Report;
    use std::collections::HashMap;

    fn report_with(department: &str, employees: &[&str]) -> Report {
        Report::new(vec![(department, employees.to_vec())].into_iter().collect())
    }

    #[test]
    fn test_format_three_employees() {
        let report = report_with("engineering", &["a", "b", "c"]);
        assert_eq!(format_department(&report, "engineering").unwrap(), "a | b | c");
    }

    #[test]
    fn test_format_single_employee() {
        let report = report_with("engineering", &["solo"]);
        assert_eq!(format_department(&report, "engineering").unwrap(), "solo");
    }

    #[test]
    fn test_format_empty_department() {
        let report = report_with("engineering", &[]);
        assert_eq!(format_department(&report, "engineering").unwrap(), "");
    }

    #[test]
    fn test_format_short_names_not_truncated() {
        let report = report_with("ops", &["x", "y"]);
        assert_eq!(format_department(&report, "ops").unwrap(), "x | y");
    }

    #[test]
    fn test_format_unknown_department() {
        let report = report_with("engineering", &["alice"]);
        let err = format_department(&report, "sales").unwrap_err();
        assert!(matches!(
            err,
            ReportError::UnknownDepartment { ref department } if department == "sales"
        ));
    }

    #[test]
    fn test_format_with_custom_delimiter() {
        let report = report_with("sales", &["carol", "dave"]);
        let options = FormatOptions {
            delimiter: ", ".to_string(),
            default_department: "sales".to_string(),
        };

        assert_eq!(format_department_with(&report, "sales", &options).unwrap(), "carol, dave");
        assert_eq!(format_default_department(&report, &options).unwrap(), "carol, dave");
    }

    #[test]
    fn test_format_default_department_uses_engineering() {
        let report = report_with("engineering", &["alice", "bob"]);
        assert_eq!(
            format_default_department(&report, &FormatOptions::default()).unwrap(),
            "alice | bob"
        );
    }

    #[test]
    fn test_format_hash_map_groups() {
        let mut groups = HashMap::new();
        groups.insert("hr".to_string(), vec!["erin".to_string(), "frank".to_string()]);
        assert_eq!(format_department(&groups, "hr").unwrap(), "erin | frank");
    }
}
