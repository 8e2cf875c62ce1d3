pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::FormatOptions;
pub use crate::core::{
    factory::create_report,
    flatten::{flatten_employees, Employees},
    format::{
        format_default_department, format_department, format_department_with, DEFAULT_DELIMITER,
        DEFAULT_DEPARTMENT,
    },
};
pub use crate::domain::{
    model::{DepartmentMap, Report},
    ports::EmployeeGroups,
};
pub use crate::utils::error::{ErrorCategory, ReportError, Result};
