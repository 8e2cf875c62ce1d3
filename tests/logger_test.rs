use employee_report::utils::logger;
use employee_report::{create_report, flatten_employees, DepartmentMap};

#[test]
fn test_logger_installs_once() {
    assert!(logger::init_json_logger());
    assert!(!logger::init_logger(true));

    let report = create_report(
        vec![("engineering", vec!["alice"])]
            .into_iter()
            .collect::<DepartmentMap>(),
    );
    assert_eq!(flatten_employees(&report), vec!["alice"]);
}
