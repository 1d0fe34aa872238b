use hrdesk_core::db::open_db_in_memory;
use hrdesk_core::{
    Department, DepartmentValidationError, Employee, EmployeeLookup, EmployeeValidationError,
    RepoError, ReviewRepository, SqliteDepartmentRepository, SqliteEmployeeRepository,
    SqliteReviewRepository,
};
use rusqlite::Connection;

fn create_tables(conn: &Connection) {
    SqliteDepartmentRepository::new(conn).create_table().unwrap();
    SqliteEmployeeRepository::new(conn).create_table().unwrap();
    SqliteReviewRepository::new(conn).create_table().unwrap();
}

#[test]
fn employees_returns_the_reviewed_employee() {
    let conn = open_db_in_memory().unwrap();
    create_tables(&conn);
    let employees = SqliteEmployeeRepository::new(&conn);
    let mut employee = Employee::new("Lee", "Manager", None);
    let employee_id = employees.save(&mut employee).unwrap();

    let mut repo = SqliteReviewRepository::new(&conn);
    let review = repo.create(2023, "Good work", employee_id).unwrap();

    let found = repo.employees(&review).unwrap();
    assert_eq!(found, vec![employee]);
}

#[test]
fn departments_matches_department_id_against_employee_id() {
    let conn = open_db_in_memory().unwrap();
    create_tables(&conn);
    let departments = SqliteDepartmentRepository::new(&conn);
    let mut payroll = Department::new("Payroll", "Building A");
    let mut human_resources = Department::new("Human Resources", "Building C");
    departments.save(&mut payroll).unwrap();
    departments.save(&mut human_resources).unwrap();

    let employees = SqliteEmployeeRepository::new(&conn);
    let mut lee = Employee::new("Lee", "Manager", human_resources.id);
    let lee_id = employees.save(&mut lee).unwrap();
    assert_eq!(Some(lee_id), payroll.id);

    let mut repo = SqliteReviewRepository::new(&conn);
    let review = repo.create(2023, "Good work", lee_id).unwrap();

    assert_eq!(repo.departments(&review).unwrap(), vec![payroll]);
    assert_eq!(
        repo.departments_via_employee(&review).unwrap(),
        vec![human_resources]
    );
}

#[test]
fn relations_are_empty_when_rows_are_missing() {
    let conn = open_db_in_memory().unwrap();
    create_tables(&conn);
    let employees = SqliteEmployeeRepository::new(&conn);
    let mut employee = Employee::new("Sasha", "Analyst", None);
    let employee_id = employees.save(&mut employee).unwrap();

    let mut repo = SqliteReviewRepository::new(&conn);
    let review = repo.create(2024, "Promising", employee_id).unwrap();

    assert!(repo.departments(&review).unwrap().is_empty());
    assert!(repo.departments_via_employee(&review).unwrap().is_empty());

    employees.delete(&mut employee).unwrap();
    assert!(repo.employees(&review).unwrap().is_empty());
}

#[test]
fn employee_repository_crud_and_lookup() {
    let conn = open_db_in_memory().unwrap();
    create_tables(&conn);
    let employees = SqliteEmployeeRepository::new(&conn);

    let mut first = Employee::new("Lee", "Manager", Some(3));
    let mut second = Employee::new("Sasha", "Analyst", None);
    let first_id = employees.save(&mut first).unwrap();
    employees.save(&mut second).unwrap();

    assert_eq!(employees.find_by_id(first_id).unwrap(), Some(first.clone()));
    assert_eq!(employees.find_employee(first_id).unwrap(), Some(first.clone()));
    assert_eq!(employees.get_all().unwrap(), vec![first.clone(), second]);

    employees.delete(&mut first).unwrap();
    assert_eq!(first.id, None);
    assert!(employees.find_employee(first_id).unwrap().is_none());
}

#[test]
fn employee_repository_rejects_invalid_employees() {
    let conn = open_db_in_memory().unwrap();
    create_tables(&conn);
    let employees = SqliteEmployeeRepository::new(&conn);

    let mut nameless = Employee::new("", "Manager", None);
    let err = employees.save(&mut nameless).unwrap_err();
    assert!(matches!(
        err,
        RepoError::EmployeeValidation(EmployeeValidationError::EmptyName)
    ));
    assert_eq!(nameless.id, None);

    conn.execute_batch(
        "INSERT INTO employees (name, job_title, department_id) VALUES ('Kai', NULL, NULL);",
    )
    .unwrap();
    let err = employees.get_all().unwrap_err();
    assert!(matches!(
        err,
        RepoError::EmployeeValidation(EmployeeValidationError::EmptyJobTitle)
    ));
}

#[test]
fn department_repository_crud_and_validation() {
    let conn = open_db_in_memory().unwrap();
    create_tables(&conn);
    let departments = SqliteDepartmentRepository::new(&conn);

    let mut payroll = Department::new("Payroll", "Building A");
    let id = departments.save(&mut payroll).unwrap();
    assert_eq!(departments.find_by_id(id).unwrap(), Some(payroll.clone()));
    assert_eq!(departments.get_all().unwrap(), vec![payroll.clone()]);

    let mut nowhere = Department::new("Legal", "");
    let err = departments.save(&mut nowhere).unwrap_err();
    assert!(matches!(
        err,
        RepoError::DepartmentValidation(DepartmentValidationError::EmptyLocation)
    ));

    departments.delete(&mut payroll).unwrap();
    assert_eq!(payroll.id, None);
    assert!(departments.find_by_id(id).unwrap().is_none());
}

#[test]
fn collaborator_table_ddl_is_idempotent() {
    let conn = open_db_in_memory().unwrap();
    let departments = SqliteDepartmentRepository::new(&conn);
    let employees = SqliteEmployeeRepository::new(&conn);

    departments.create_table().unwrap();
    employees.create_table().unwrap();
    employees.drop_table().unwrap();
    departments.drop_table().unwrap();
    departments.drop_table().unwrap();
    departments.create_table().unwrap();
    employees.create_table().unwrap();
}
