use crate::domain::model::{DepartmentMap, Report};
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Read-only view over employees grouped by department.
pub trait EmployeeGroups {
    /// Departments in the structure's natural iteration order.
    fn departments(&self) -> impl Iterator<Item = (&str, &[String])>;

    fn department(&self, name: &str) -> Option<&[String]>;
}

impl EmployeeGroups for DepartmentMap {
    fn departments(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.iter()
    }

    fn department(&self, name: &str) -> Option<&[String]> {
        self.get(name)
    }
}

impl EmployeeGroups for Report {
    fn departments(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.all_employees.iter()
    }

    fn department(&self, name: &str) -> Option<&[String]> {
        self.all_employees.get(name)
    }
}

impl EmployeeGroups for BTreeMap<String, Vec<String>> {
    fn departments(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.iter()
            .map(|(name, employees)| (name.as_str(), employees.as_slice()))
    }

    fn department(&self, name: &str) -> Option<&[String]> {
        self.get(name).map(Vec::as_slice)
    }
}

impl<S: BuildHasher> EmployeeGroups for HashMap<String, Vec<String>, S> {
    fn departments(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.iter()
            .map(|(name, employees)| (name.as_str(), employees.as_slice()))
    }

    fn department(&self, name: &str) -> Option<&[String]> {
        self.get(name).map(Vec::as_slice)
    }
}
