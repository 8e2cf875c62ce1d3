use crate::domain::model::{DepartmentMap, Report};

/// Wraps a department → employees mapping in a [`Report`].
///
/// Accepts anything convertible into a [`DepartmentMap`], including
/// `BTreeMap<String, Vec<String>>` and `HashMap<String, Vec<String>>`.
/// The mapping is moved in as-is; no copy of the employee lists is made.
pub fn create_report(employees_by_department: impl Into<DepartmentMap>) -> Report {
    let report = Report::new(employees_by_department.into());
    tracing::debug!(
        departments = report.number_of_departments(),
        employees = report.total_employees(),
        "Created report"
    );
    report
}
