use crate::domain::model::Report;
use crate::domain::ports::EmployeeGroups;
use std::slice;

/// Collects every employee into one list, department by department.
///
/// Departments are visited in the structure's iteration order and employees
/// in list order. Duplicates are kept.
pub fn flatten_employees<G: EmployeeGroups>(groups: &G) -> Vec<String> {
    let employees: Vec<String> = groups
        .departments()
        .flat_map(|(_, employees)| employees.iter().cloned())
        .collect();
    tracing::trace!(employees = employees.len(), "Flattened employees");
    employees
}

/// Borrowing iterator over all employees of a [`Report`].
pub struct Employees<'a> {
    departments: indexmap::map::Values<'a, String, Vec<String>>,
    current: slice::Iter<'a, String>,
}

impl<'a> Iterator for Employees<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        loop {
            if let Some(employee) = self.current.next() {
                return Some(employee.as_str());
            }
            let employees = self.departments.next()?;
            self.current = employees.iter();
        }
    }
}

impl Report {
    pub fn employees(&self) -> Employees<'_> {
        Employees {
            departments: self.all_employees.employee_lists(),
            current: Default::default(),
        }
    }
}

impl<'a> IntoIterator for &'a Report {
    type Item = &'a str;
    type IntoIter = Employees<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.employees()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::DepartmentMap;
    use std::collections::BTreeMap;

    fn sample_report() -> Report {
        Report::new(
            vec![
                ("engineering", vec!["alice", "bob"]),
                ("marketing", vec![]),
                ("sales", vec!["carol", "alice"]),
            ]
            .into_iter()
            .collect(),
        )
    }

    #[test]
    fn test_flatten_keeps_department_then_employee_order() {
        let report = sample_report();
        assert_eq!(
            flatten_employees(&report),
            vec!["alice", "bob", "carol", "alice"]
        );
    }

    #[test]
    fn test_flatten_length_matches_total() {
        let report = sample_report();
        assert_eq!(flatten_employees(&report).len(), report.total_employees());
    }

    #[test]
    fn test_flatten_empty_report() {
        let report = Report::new(DepartmentMap::new());
        assert!(flatten_employees(&report).is_empty());
        assert_eq!(report.employees().next(), None);
    }

    #[test]
    fn test_flatten_btree_map_uses_sorted_keys() {
        let mut groups = BTreeMap::new();
        groups.insert("sales".to_string(), vec!["carol".to_string()]);
        groups.insert("engineering".to_string(), vec!["alice".to_string()]);

        assert_eq!(flatten_employees(&groups), vec!["alice", "carol"]);
    }

    #[test]
    fn test_employees_iterator_matches_flatten() {
        let report = sample_report();
        let borrowed: Vec<&str> = report.employees().collect();
        assert_eq!(borrowed, flatten_employees(&report));

        let mut count = 0;
        for _ in &report {
            count += 1;
        }
        assert_eq!(count, 4);
    }

    #[test]
    fn test_iterator_skips_leading_empty_departments() {
        let report = Report::new(
            vec![("a", vec![]), ("b", vec![]), ("c", vec!["solo"])]
                .into_iter()
                .collect(),
        );
        assert_eq!(report.employees().collect::<Vec<_>>(), vec!["solo"]);
    }
}
