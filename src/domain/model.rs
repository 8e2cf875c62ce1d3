use crate::utils::error::{ReportError, Result};
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Department name → ordered employee list.
///
/// Keeps departments in insertion order and never holds the same name twice.
/// Re-inserting an existing department replaces its employees in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DepartmentMap {
    entries: IndexMap<String, Vec<String>>,
}

impl DepartmentMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a map from `(department, employees)` pairs, rejecting a
    /// department name that appears more than once.
    pub fn try_from_pairs<I, K, V, E>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: IntoIterator<Item = E>,
        E: Into<String>,
    {
        let mut map = Self::new();
        for (name, employees) in pairs {
            let name = name.into();
            if map.contains(&name) {
                return Err(ReportError::DuplicateDepartment { department: name });
            }
            map.entries
                .insert(name, employees.into_iter().map(Into::into).collect());
        }
        Ok(map)
    }

    pub fn insert(&mut self, name: impl Into<String>, employees: Vec<String>) -> Option<Vec<String>> {
        self.entries.insert(name.into(), employees)
    }

    /// Removes a department, keeping the remaining ones in order.
    pub fn remove(&mut self, name: &str) -> Option<Vec<String>> {
        self.entries.shift_remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.entries.get(name).map(Vec::as_slice)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Vec<String>> {
        self.entries.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, employees)| (name.as_str(), employees.as_slice()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub(crate) fn employee_lists(&self) -> indexmap::map::Values<'_, String, Vec<String>> {
        self.entries.values()
    }
}

impl<K, V, E> FromIterator<(K, V)> for DepartmentMap
where
    K: Into<String>,
    V: IntoIterator<Item = E>,
    E: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .map(|(name, employees)| {
                (name.into(), employees.into_iter().map(Into::into).collect())
            })
            .collect();
        Self { entries }
    }
}

impl From<BTreeMap<String, Vec<String>>> for DepartmentMap {
    fn from(map: BTreeMap<String, Vec<String>>) -> Self {
        Self {
            entries: map.into_iter().collect(),
        }
    }
}

impl From<HashMap<String, Vec<String>>> for DepartmentMap {
    fn from(map: HashMap<String, Vec<String>>) -> Self {
        Self {
            entries: map.into_iter().collect(),
        }
    }
}

/// Employees grouped by department.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    #[serde(rename = "allEmployees")]
    pub all_employees: DepartmentMap,
}

impl Report {
    pub fn new(all_employees: DepartmentMap) -> Self {
        Self { all_employees }
    }

    /// Counts the departments currently in the report.
    pub fn number_of_departments(&self) -> usize {
        self.all_employees.len()
    }

    pub fn total_employees(&self) -> usize {
        self.all_employees
            .iter()
            .map(|(_, employees)| employees.len())
            .sum()
    }
}
